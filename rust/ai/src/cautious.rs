//! Cautious bot: deterministic, low-card-first play.

use std::collections::BTreeSet;

use expeditions_engine::cards::{Card, Color};
use expeditions_engine::player::{DrawFrom, PlayTo, PlayerStrategy, StrategyError};

/// Cards of one color the bot wants in hand before starting that expedition.
pub const DEFAULT_MIN_CARDS_TO_OPEN: usize = 3;

/// Deterministic bot that only commits to colors it can build on.
///
/// # Strategy
///
/// - Plays its lowest legal card (wilds first) onto a color it has already
///   opened this round.
/// - Opens a new color only when holding at least `min_cards_to_open` cards
///   of it.
/// - Otherwise discards its lowest card, skipping colors it has opened.
/// - Takes the discard top whenever it is playable.
///
/// Opened colors are forgotten at every new deal.
#[derive(Debug, Clone)]
pub struct CautiousBot {
    min_cards_to_open: usize,
    opened: BTreeSet<Color>,
}

impl CautiousBot {
    pub fn new(min_cards_to_open: usize) -> Self {
        Self {
            min_cards_to_open,
            opened: BTreeSet::new(),
        }
    }

    fn count_in_color(hand: &[Card], color: Color) -> usize {
        hand.iter().filter(|c| c.color == color).count()
    }
}

impl Default for CautiousBot {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_CARDS_TO_OPEN)
    }
}

/// Wilds sort below every number of their color.
fn low_first(a: &Card, b: &Card) -> std::cmp::Ordering {
    a.value.cmp(&b.value).then(a.color.cmp(&b.color))
}

impl PlayerStrategy for CautiousBot {
    fn name(&self) -> &str {
        "CautiousBot"
    }

    fn choose_card_to_play(
        &mut self,
        hand: &[Card],
        legal: &[Card],
    ) -> Result<(Card, PlayTo), StrategyError> {
        let mut playable: Vec<Card> = hand.iter().filter(|c| legal.contains(c)).copied().collect();
        playable.sort_by(low_first);
        let pick = playable.iter().find(|c| {
            self.opened.contains(&c.color)
                || Self::count_in_color(hand, c.color) >= self.min_cards_to_open
        });
        if let Some(card) = pick {
            self.opened.insert(card.color);
            return Ok((*card, PlayTo::Expedition));
        }

        let mut discards: Vec<Card> = hand.to_vec();
        discards.sort_by(low_first);
        discards
            .iter()
            .find(|c| !self.opened.contains(&c.color))
            .or_else(|| discards.first())
            .map(|c| (*c, PlayTo::Discard))
            .ok_or_else(|| StrategyError::Internal("empty hand".into()))
    }

    fn choose_draw_source(&mut self, is_discard_top_playable: bool) -> Result<DrawFrom, StrategyError> {
        Ok(if is_discard_top_playable {
            DrawFrom::Discard
        } else {
            DrawFrom::Deck
        })
    }

    fn round_started(&mut self, _round: u32) {
        self.opened.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn opens_a_color_it_holds_enough_of() {
        let mut bot = CautiousBot::default();
        let hand = cards("Y4 Y6 Y9 B2 R3");
        let legal = cards("Y4 Y6 Y9 B2 R3 G2");
        assert_eq!(
            bot.choose_card_to_play(&hand, &legal).unwrap(),
            ("Y4".parse().unwrap(), PlayTo::Expedition)
        );
    }

    #[test]
    fn discards_low_instead_of_opening_thin_colors() {
        let mut bot = CautiousBot::default();
        let hand = cards("Y4 B2 R3 G9");
        let legal = cards("Y4 B2 R3 G9");
        assert_eq!(
            bot.choose_card_to_play(&hand, &legal).unwrap(),
            ("B2".parse().unwrap(), PlayTo::Discard)
        );
    }

    #[test]
    fn keeps_building_an_opened_color() {
        let mut bot = CautiousBot::new(2);
        let hand = cards("Y4 Y6 B2");
        let legal = cards("Y4 Y6 B2 W2");
        let (first, _) = bot.choose_card_to_play(&hand, &legal).unwrap();
        assert_eq!(first.to_string(), "Y4");

        // one yellow left, below the opening threshold, still played
        let hand = cards("Y6 B2 W8");
        let legal = cards("Y6 B2 W2 W8");
        assert_eq!(
            bot.choose_card_to_play(&hand, &legal).unwrap(),
            ("Y6".parse().unwrap(), PlayTo::Expedition)
        );
    }

    #[test]
    fn wilds_are_played_before_numbers() {
        let mut bot = CautiousBot::default();
        let hand = cards("YH Y5 Y7 B8");
        let legal = cards("YH Y5 Y7 B8");
        assert_eq!(
            bot.choose_card_to_play(&hand, &legal).unwrap(),
            ("YH".parse().unwrap(), PlayTo::Expedition)
        );
    }

    #[test]
    fn never_discards_from_opened_colors_when_avoidable() {
        let mut bot = CautiousBot::new(1);
        let (card, _) = bot
            .choose_card_to_play(&cards("Y2 B9"), &cards("Y2 B9 R2"))
            .unwrap();
        assert_eq!(card.to_string(), "Y2");
        // nothing legal now; Y3 is lower but yellow is open
        let (card, dest) = bot
            .choose_card_to_play(&cards("Y3 B9 R8"), &cards("R2"))
            .unwrap();
        assert_eq!(dest, PlayTo::Discard);
        assert_eq!(card.to_string(), "R8");
    }

    #[test]
    fn new_deal_forgets_opened_colors() {
        let mut bot = CautiousBot::new(2);
        let legal = cards("YH Y3 B9");
        let (card, _) = bot.choose_card_to_play(&cards("YH Y3"), &legal).unwrap();
        assert_eq!(card.to_string(), "YH");
        // same listing length as before, only the deal tells a new round
        bot.round_started(2);
        assert_eq!(
            bot.choose_card_to_play(&cards("Y3 B9"), &legal).unwrap(),
            ("Y3".parse().unwrap(), PlayTo::Discard)
        );
    }

    #[test]
    fn draws_playable_discards() {
        let mut bot = CautiousBot::default();
        assert_eq!(bot.choose_draw_source(true).unwrap(), DrawFrom::Discard);
        assert_eq!(bot.choose_draw_source(false).unwrap(), DrawFrom::Deck);
    }
}
