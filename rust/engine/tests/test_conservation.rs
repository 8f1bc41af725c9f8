//! Property tests: random move sequences never lose or duplicate cards, and
//! rejected moves leave the table untouched.

use expeditions_engine::cards::{build_deck, Card, DeckVariant};
use expeditions_engine::game::{GameConfig, GameState, TurnPhase};
use expeditions_engine::player::{DrawFrom, PlayTo};
use expeditions_engine::rules::LegalityScope;
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct Move {
    seat_offset: usize,
    card_pick: usize,
    to_expedition: bool,
    from_discard: bool,
}

fn moves() -> impl Strategy<Value = Vec<Move>> {
    prop::collection::vec(
        (0usize..8, any::<usize>(), any::<bool>(), any::<bool>()).prop_map(
            |(seat_offset, card_pick, to_expedition, from_discard)| Move {
                seat_offset,
                card_pick,
                to_expedition,
                from_discard,
            },
        ),
        1..300,
    )
}

/// Cards outside the deck, checked against the full card set. Returns
/// `None` if any card shows up more often than the variant holds.
fn visible_cards(gs: &GameState) -> Option<Vec<Card>> {
    let snap = gs.snapshot();
    let mut visible: Vec<Card> = snap.discard;
    visible.extend(snap.hands.into_iter().flatten());
    visible.extend(snap.expeditions.into_iter().flatten().flatten());

    let mut pool = build_deck(gs.config().variant);
    for c in &visible {
        let i = pool.iter().position(|x| x == c)?;
        pool.swap_remove(i);
    }
    Some(visible)
}

fn numbered_ascending(gs: &GameState) -> bool {
    gs.boards().iter().all(|b| {
        b.iter().all(|e| {
            let values: Vec<u8> = e
                .cards()
                .iter()
                .filter(|c| !c.is_wild())
                .map(|c| c.value)
                .collect();
            values.windows(2).all(|w| w[0] < w[1])
        })
    })
}

fn variant_strategy() -> impl Strategy<Value = DeckVariant> {
    prop_oneof![
        Just(DeckVariant::Classic),
        Just(DeckVariant::Compact),
        Just(DeckVariant::CompactWithWilds),
    ]
}

fn scope_strategy() -> impl Strategy<Value = LegalityScope> {
    prop_oneof![Just(LegalityScope::AllBoards), Just(LegalityScope::OwnBoard)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_play_conserves_cards(
        seed in any::<u64>(),
        players in 2usize..=4,
        variant in variant_strategy(),
        legality in scope_strategy(),
        script in moves(),
    ) {
        let config = GameConfig {
            player_count: players,
            cards_per_player: 4,
            max_rounds: 2,
            variant,
            legality,
            seed: Some(seed),
            ..GameConfig::default()
        };
        let mut gs = GameState::new(config).unwrap();

        for mv in script {
            if gs.is_game_over() && gs.phase() == TurnPhase::AwaitingPlay {
                break;
            }
            if gs.phase() == TurnPhase::AwaitingPlay && gs.is_round_over() {
                gs.assign_points().unwrap();
                gs.create_new_round().unwrap();
                prop_assert!(gs.boards().iter().all(|b| b.is_empty()));
                continue;
            }

            let seat = (gs.turn_seat() + mv.seat_offset / 6) % players;
            let before = gs.snapshot();
            let result = match gs.phase() {
                TurnPhase::AwaitingPlay => {
                    let hand = gs.hand(seat).cards();
                    let card = hand[mv.card_pick % hand.len()];
                    let dest = if mv.to_expedition { PlayTo::Expedition } else { PlayTo::Discard };
                    gs.play_card_to(seat, card, dest).map(|_| ())
                }
                TurnPhase::AwaitingDraw { .. } => {
                    let source = if mv.from_discard { DrawFrom::Discard } else { DrawFrom::Deck };
                    gs.draw_from(seat, source).map(|_| ())
                }
                TurnPhase::Scored => unreachable!("scored rounds are redealt above"),
            };
            if let Err(e) = result {
                prop_assert!(e.is_player_move_error(), "unexpected error {e}");
                prop_assert_eq!(gs.snapshot(), before);
            }

            let visible = visible_cards(&gs);
            prop_assert!(visible.is_some(), "card duplicated");
            let visible_len = visible.map(|v| v.len()).unwrap_or(0);
            prop_assert_eq!(visible_len + gs.deck_remaining(), variant.deck_size());
            prop_assert_eq!(gs.total_cards(), variant.deck_size());
            prop_assert!(numbered_ascending(&gs));
            if gs.phase() == TurnPhase::AwaitingPlay {
                prop_assert!(gs.hands().iter().all(|h| h.len() == 4));
            }
        }
    }
}
