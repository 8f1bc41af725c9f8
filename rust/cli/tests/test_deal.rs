mod helpers;

use helpers::{clear_env, run_cli};
use serial_test::serial;

#[test]
#[serial]
fn deal_shows_every_hand_and_the_deck() {
    clear_env();
    let r = run_cli(&["deal", "--seed", "42"], "");
    assert_eq!(r.code, 0, "stderr: {}", r.stderr);
    assert!(r.stdout.contains("Seed: 42"));
    assert!(r.stdout.contains("Variant: classic"));
    assert!(r.stdout.contains("Seat 0: "));
    assert!(r.stdout.contains("Seat 1: "));
    assert!(!r.stdout.contains("Seat 2: "));
    assert!(r.stdout.contains("Deck remaining: 44"));
}

#[test]
#[serial]
fn deal_is_deterministic_per_seed() {
    clear_env();
    let a = run_cli(&["deal", "--seed", "8", "--players", "3"], "");
    let b = run_cli(&["deal", "--seed", "8", "--players", "3"], "");
    let c = run_cli(&["deal", "--seed", "9", "--players", "3"], "");
    assert_eq!(a.stdout, b.stdout);
    assert_ne!(a.stdout, c.stdout);
    assert!(a.stdout.contains("Deck remaining: 36"));
}

#[test]
#[serial]
fn compact_deck_fits_four_players_but_not_five() {
    clear_env();
    let ok = run_cli(&["deal", "--seed", "1", "--players", "2", "--variant", "compact"], "");
    assert_eq!(ok.code, 0);
    assert!(ok.stdout.contains("Deck remaining: 9"));

    let too_many = run_cli(&["deal", "--seed", "1", "--players", "5", "--variant", "compact"], "");
    assert_eq!(too_many.code, 2);
    assert!(too_many.stderr.contains("Error: "));
}
