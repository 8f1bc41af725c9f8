use expeditions_ai::available_ais;
use expeditions_engine::cards::DeckVariant;
use expeditions_engine::game::DEFAULT_MAX_ROUNDS;
use expeditions_engine::rules::LegalityScope;
use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "EXPEDITIONS_CONFIG";
pub const SEED_ENV: &str = "EXPEDITIONS_SEED";
pub const ROUNDS_ENV: &str = "EXPEDITIONS_ROUNDS";
pub const VARIANT_ENV: &str = "EXPEDITIONS_VARIANT";
pub const LEGALITY_ENV: &str = "EXPEDITIONS_LEGALITY";
pub const AI_ENV: &str = "EXPEDITIONS_AI";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub rounds: u32,
    pub variant: DeckVariant,
    pub legality: LegalityScope,
    pub ai: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub rounds: ValueSource,
    pub variant: ValueSource,
    pub legality: ValueSource,
    pub ai: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            rounds: ValueSource::Default,
            variant: ValueSource::Default,
            legality: ValueSource::Default,
            ai: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            rounds: DEFAULT_MAX_ROUNDS,
            variant: DeckVariant::Classic,
            legality: LegalityScope::AllBoards,
            ai: "baseline".into(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

/// File first, then environment; each value remembers where it came from.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.rounds {
            cfg.rounds = v;
            sources.rounds = ValueSource::File;
        }
        if let Some(v) = f.variant {
            cfg.variant = v;
            sources.variant = ValueSource::File;
        }
        if let Some(v) = f.legality {
            cfg.legality = v;
            sources.legality = ValueSource::File;
        }
        if let Some(v) = f.ai {
            cfg.ai = v;
            sources.ai = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var(SEED_ENV)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(rounds) = std::env::var(ROUNDS_ENV)
        && !rounds.is_empty()
    {
        cfg.rounds = rounds
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid rounds".into()))?;
        sources.rounds = ValueSource::Env;
    }
    if let Ok(variant) = std::env::var(VARIANT_ENV)
        && !variant.is_empty()
    {
        cfg.variant = variant.parse().map_err(ConfigError::Invalid)?;
        sources.variant = ValueSource::Env;
    }
    if let Ok(legality) = std::env::var(LEGALITY_ENV)
        && !legality.is_empty()
    {
        cfg.legality = legality.parse().map_err(ConfigError::Invalid)?;
        sources.legality = ValueSource::Env;
    }
    if let Ok(ai) = std::env::var(AI_ENV)
        && !ai.is_empty()
    {
        cfg.ai = ai;
        sources.ai = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    rounds: Option<u32>,
    #[serde(default)]
    variant: Option<DeckVariant>,
    #[serde(default)]
    legality: Option<LegalityScope>,
    #[serde(default)]
    ai: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.rounds == 0 {
        return Err(ConfigError::Invalid(
            "rounds must be >= 1".into(),
        ));
    }
    if !available_ais().contains(&cfg.ai.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "unknown ai '{}' (available: {})",
            cfg.ai,
            available_ais().join(", ")
        )));
    }
    Ok(())
}
