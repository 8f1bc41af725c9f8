use std::cell::{Cell, RefCell};
use std::rc::Rc;

use expeditions_engine::cards::{build_deck, Card, DeckVariant};
use expeditions_engine::engine::{Engine, NullRenderer, Renderer};
use expeditions_engine::errors::GameError;
use expeditions_engine::game::{GameConfig, GameState, TurnPhase};
use expeditions_engine::logger::{Action, GameLog};
use expeditions_engine::player::{DrawFrom, PlayTo, PlayerStrategy, StrategyError};

/// Plays the first hand card that is legal, otherwise discards.
struct FirstLegal;

impl PlayerStrategy for FirstLegal {
    fn name(&self) -> &str {
        "FirstLegal"
    }

    fn choose_card_to_play(
        &mut self,
        hand: &[Card],
        legal: &[Card],
    ) -> Result<(Card, PlayTo), StrategyError> {
        match hand.iter().find(|c| legal.contains(c)) {
            Some(c) => Ok((*c, PlayTo::Expedition)),
            None => Ok((hand[0], PlayTo::Discard)),
        }
    }

    fn choose_draw_source(&mut self, playable: bool) -> Result<DrawFrom, StrategyError> {
        Ok(if playable {
            DrawFrom::Discard
        } else {
            DrawFrom::Deck
        })
    }
}

/// Names a card it does not hold on every other play attempt.
struct Flaky {
    attempts: Rc<Cell<usize>>,
}

impl PlayerStrategy for Flaky {
    fn name(&self) -> &str {
        "Flaky"
    }

    fn choose_card_to_play(
        &mut self,
        hand: &[Card],
        _legal: &[Card],
    ) -> Result<(Card, PlayTo), StrategyError> {
        let n = self.attempts.get();
        self.attempts.set(n + 1);
        if n % 2 == 0 {
            let missing = build_deck(DeckVariant::Classic)
                .into_iter()
                .find(|c| !hand.contains(c))
                .ok_or_else(|| StrategyError::Internal("holds every card".into()))?;
            return Ok((missing, PlayTo::Discard));
        }
        Ok((hand[0], PlayTo::Discard))
    }

    fn choose_draw_source(&mut self, _playable: bool) -> Result<DrawFrom, StrategyError> {
        Ok(DrawFrom::Deck)
    }
}

struct Quitter;

impl PlayerStrategy for Quitter {
    fn name(&self) -> &str {
        "Quitter"
    }

    fn choose_card_to_play(
        &mut self,
        _hand: &[Card],
        _legal: &[Card],
    ) -> Result<(Card, PlayTo), StrategyError> {
        Err(StrategyError::Quit)
    }

    fn choose_draw_source(&mut self, _playable: bool) -> Result<DrawFrom, StrategyError> {
        Err(StrategyError::Quit)
    }
}

#[derive(Default)]
struct Recorder {
    renders: usize,
    errors: Vec<GameError>,
    final_log: Option<GameLog>,
    last_round: u32,
}

impl Renderer for Recorder {
    fn render(&mut self, state: &GameState, players: &[&str]) {
        assert_eq!(players.len(), state.player_count());
        self.renders += 1;
        self.last_round = state.current_round_number();
    }

    fn render_error(&mut self, error: &GameError) {
        self.errors.push(error.clone());
    }

    fn render_log(&mut self, log: &GameLog) {
        self.final_log = Some(log.clone());
    }
}

fn config(seed: u64) -> GameConfig {
    GameConfig {
        seed: Some(seed),
        ..GameConfig::default()
    }
}

#[test]
fn full_game_runs_every_round_and_logs_it() {
    let mut engine = Engine::new(config(42), vec![Box::new(FirstLegal), Box::new(FirstLegal)]).unwrap();
    let mut recorder = Recorder::default();
    let winner = engine.play(&mut recorder).unwrap().unwrap();

    let state = engine.state();
    assert!(state.is_game_over());
    assert_eq!(state.current_round_number(), 3);
    assert!(state.scorer().ledgers().iter().all(|l| l.values().len() == 3));
    assert_eq!(winner.points(), *state.ledger_totals().iter().max().unwrap());
    assert_eq!(state.total_cards(), 60);

    let log = engine.log();
    assert_eq!(log.count(Action::BeginGame), 1);
    assert_eq!(log.count(Action::BeginRound), 3);
    assert_eq!(log.count(Action::EndRound), 3);
    assert_eq!(log.count(Action::EndGame), 1);
    assert_eq!(log.count(Action::PlayCard), log.count(Action::PickupCard));
    assert_eq!(log.events()[0].action, Action::BeginGame);
    assert_eq!(log.events().last().unwrap().action, Action::EndGame);

    assert!(recorder.errors.is_empty());
    assert!(recorder.renders > 0);
    assert_eq!(recorder.last_round, 3);
    assert_eq!(recorder.final_log.as_ref(), Some(log));
}

#[test]
fn same_seed_replays_the_same_game() {
    let run = |seed| {
        let mut engine =
            Engine::new(config(seed), vec![Box::new(FirstLegal), Box::new(FirstLegal)]).unwrap();
        engine.play(&mut NullRenderer).unwrap();
        engine.log().clone()
    };
    assert_eq!(run(8), run(8));
}

#[test]
fn illegal_choices_are_reported_and_retried() {
    let attempts = Rc::new(Cell::new(0));
    let cfg = GameConfig {
        max_rounds: 1,
        ..config(3)
    };
    let mut engine = Engine::new(
        cfg,
        vec![
            Box::new(Flaky {
                attempts: Rc::clone(&attempts),
            }),
            Box::new(FirstLegal),
        ],
    )
    .unwrap();
    let mut recorder = Recorder::default();
    engine.play(&mut recorder).unwrap();

    assert!(!recorder.errors.is_empty());
    assert!(recorder
        .errors
        .iter()
        .all(|e| matches!(e, GameError::CardNotInHand { seat: 0, .. })));
    assert_eq!(recorder.errors.len() * 2, attempts.get());

    let log = engine.log();
    assert_eq!(log.count(Action::PlayCard), log.count(Action::PickupCard));
    assert_eq!(engine.state().total_cards(), 60);
}

#[test]
fn quitting_stops_the_game() {
    let mut engine = Engine::new(config(1), vec![Box::new(Quitter), Box::new(Quitter)]).unwrap();
    let seat = engine.state().turn_seat();
    assert_eq!(
        engine.play(&mut NullRenderer),
        Err(GameError::PlayerQuit { seat })
    );
    assert_eq!(engine.log().count(Action::EndGame), 0);
}

#[test]
fn seat_count_must_match_config() {
    let cfg = GameConfig {
        player_count: 3,
        ..config(1)
    };
    assert!(matches!(
        Engine::new(cfg, vec![Box::new(FirstLegal), Box::new(FirstLegal)]),
        Err(GameError::InvalidConfig(_))
    ));
}

#[test]
fn five_players_compact_deck() {
    let cfg = GameConfig {
        player_count: 5,
        cards_per_player: 4,
        variant: DeckVariant::Compact,
        ..config(11)
    };
    let players: Vec<Box<dyn PlayerStrategy>> = (0..5)
        .map(|_| Box::new(FirstLegal) as Box<dyn PlayerStrategy>)
        .collect();
    let mut engine = Engine::new(cfg, players).unwrap();
    let winner = engine.play(&mut NullRenderer).unwrap();
    assert!(winner.is_some());
    assert_eq!(engine.state().total_cards(), 25);
    assert_eq!(engine.player_names(), vec!["FirstLegal"; 5]);
}

/// Plays the current round to its end directly on the state.
fn play_out_round(gs: &mut GameState) {
    let mut bot = FirstLegal;
    while !(gs.phase() == TurnPhase::AwaitingPlay && gs.is_round_over()) {
        let seat = gs.turn_seat();
        if gs.phase() == TurnPhase::AwaitingPlay {
            let legal = gs.board_playable_cards();
            let hand = gs.hand(seat).cards().to_vec();
            let (card, dest) = bot.choose_card_to_play(&hand, &legal).unwrap();
            gs.play_card_to(seat, card, dest).unwrap();
        }
        let source = bot
            .draw_source(gs.can_draw_from_discard(), gs.is_discard_top_playable())
            .unwrap();
        gs.draw_from(seat, source).unwrap();
    }
}

#[test]
fn playing_a_finished_game_again_returns_its_winner() {
    let cfg = GameConfig {
        max_rounds: 1,
        ..config(21)
    };
    let mut engine = Engine::new(cfg, vec![Box::new(FirstLegal), Box::new(FirstLegal)]).unwrap();
    let first = engine.play(&mut NullRenderer).unwrap();
    let events = engine.log().len();

    let mut recorder = Recorder::default();
    assert_eq!(engine.play(&mut recorder).unwrap(), first);
    assert_eq!(engine.log().len(), events);
    assert_eq!(recorder.renders, 0);
}

#[test]
fn scored_state_resumes_with_the_next_round() {
    let cfg = GameConfig {
        max_rounds: 2,
        ..config(22)
    };
    let mut gs = GameState::new(cfg).unwrap();
    play_out_round(&mut gs);
    gs.assign_points().unwrap();
    assert_eq!(gs.phase(), TurnPhase::Scored);

    let mut engine = Engine::from_state(gs, vec![Box::new(FirstLegal), Box::new(FirstLegal)]);
    let winner = engine.play(&mut NullRenderer).unwrap();

    let state = engine.state();
    assert!(winner.is_some());
    assert_eq!(state.current_round_number(), 2);
    assert!(state.scorer().ledgers().iter().all(|l| l.values().len() == 2));
    let log = engine.log();
    assert_eq!(log.count(Action::BeginRound), 1);
    assert_eq!(log.count(Action::EndRound), 1);
    assert_eq!(log.count(Action::EndGame), 1);
}

/// Records every round it is told about.
struct RoundWatcher {
    rounds: Rc<RefCell<Vec<u32>>>,
}

impl PlayerStrategy for RoundWatcher {
    fn name(&self) -> &str {
        "RoundWatcher"
    }

    fn choose_card_to_play(
        &mut self,
        hand: &[Card],
        legal: &[Card],
    ) -> Result<(Card, PlayTo), StrategyError> {
        FirstLegal.choose_card_to_play(hand, legal)
    }

    fn choose_draw_source(&mut self, playable: bool) -> Result<DrawFrom, StrategyError> {
        FirstLegal.choose_draw_source(playable)
    }

    fn round_started(&mut self, round: u32) {
        self.rounds.borrow_mut().push(round);
    }
}

#[test]
fn players_hear_about_every_deal() {
    let rounds = Rc::new(RefCell::new(Vec::new()));
    let watcher = RoundWatcher {
        rounds: Rc::clone(&rounds),
    };
    let mut engine = Engine::new(config(4), vec![Box::new(watcher), Box::new(FirstLegal)]).unwrap();
    engine.play(&mut NullRenderer).unwrap();
    assert_eq!(*rounds.borrow(), vec![1, 2, 3]);
}
