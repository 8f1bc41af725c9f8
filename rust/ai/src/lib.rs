//! # expeditions-ai: Automated Opponents
//!
//! Computer players for the expeditions card game. Every bot implements the
//! engine's [`PlayerStrategy`] contract, so it can sit at any seat of an
//! [`Engine`](expeditions_engine::engine::Engine).
//!
//! ## Core Components
//!
//! - [`baseline`] - Random legal play, seeded for reproducible simulations
//! - [`cautious`] - Deterministic low-card play that avoids thin expeditions
//! - [`create_ai`] - Factory function for creating bots by name
//!
//! ## Quick Start
//!
//! ```rust
//! use expeditions_ai::create_ai;
//! use expeditions_engine::engine::{Engine, NullRenderer};
//! use expeditions_engine::game::GameConfig;
//!
//! let a = create_ai("baseline", 1).expect("known bot");
//! let b = create_ai("cautious", 2).expect("known bot");
//!
//! let config = GameConfig { seed: Some(42), max_rounds: 1, ..GameConfig::default() };
//! let mut engine = Engine::new(config, vec![a, b]).expect("two seats");
//! let winner = engine.play(&mut NullRenderer).expect("bots never quit");
//! assert!(winner.is_some());
//! ```
//!
//! ## AI Types
//!
//! - `"baseline"` - [`baseline::BaselineBot`]
//! - `"cautious"` - [`cautious::CautiousBot`]

use expeditions_engine::player::PlayerStrategy;

pub mod baseline;
pub mod cautious;

/// Names accepted by [`create_ai`].
pub fn available_ais() -> &'static [&'static str] {
    &["baseline", "cautious"]
}

/// Creates a bot by name. `seed` drives any randomness the bot uses.
///
/// Returns `None` for an unknown name.
///
/// # Example
///
/// ```rust
/// use expeditions_ai::create_ai;
///
/// let ai = create_ai("baseline", 7).unwrap();
/// assert_eq!(ai.name(), "BaselineBot");
/// assert!(create_ai("grandmaster", 7).is_none());
/// ```
pub fn create_ai(name: &str, seed: u64) -> Option<Box<dyn PlayerStrategy>> {
    match name {
        "baseline" => Some(Box::new(baseline::BaselineBot::new(seed))),
        "cautious" => Some(Box::new(cautious::CautiousBot::default())),
        _ => None,
    }
}
