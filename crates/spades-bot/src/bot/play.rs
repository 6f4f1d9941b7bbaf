use crate::bot::BotDifficulty;
use rand::Rng;
use spades_core::model::hand::Hand;
use spades_core::model::legality::valid_moves;
use spades_core::model::rank::Rank;
use spades_core::model::trick::Trick;

/// Picks a hand index to play for a computer seat. Easy plays uniformly
/// at random among the legal moves; medium tries to win cheaply while it
/// still needs tricks and to duck once its bid is safe; hard currently
/// delegates to medium.
pub struct PlayPlanner;

impl PlayPlanner {
    pub fn choose<R: Rng + ?Sized>(
        hand: &Hand,
        trick: &Trick,
        bid: u8,
        tricks_won: u8,
        difficulty: BotDifficulty,
        rng: &mut R,
    ) -> Option<usize> {
        let legal = valid_moves(hand, trick.lead_suit());
        match legal.len() {
            0 => return None,
            1 => return Some(legal[0]),
            _ => {}
        }

        let choice = match difficulty {
            BotDifficulty::Easy => legal[rng.gen_range(0..legal.len())],
            // Hard has no extra lookahead yet; it plays the medium line.
            BotDifficulty::Medium | BotDifficulty::Hard => {
                let needs_tricks = tricks_won < bid;
                if trick.is_empty() {
                    Self::choose_lead(hand, &legal, needs_tricks)
                } else {
                    Self::choose_follow(hand, &legal, trick, needs_tricks)
                }
            }
        };
        Some(choice)
    }

    /// Leading: chase a likely winner (highest card jack or above) while
    /// the bid is short, otherwise throw away the weakest card (lowest
    /// card eight or below). First legal card as a last resort.
    fn choose_lead(hand: &Hand, legal: &[usize], needs_tricks: bool) -> usize {
        let rank_of = |index: usize| hand.card_at(index).expect("legal index is in hand").rank;

        if needs_tricks {
            let high = legal
                .iter()
                .copied()
                .filter(|&index| rank_of(index) >= Rank::Jack)
                .max_by_key(|&index| rank_of(index));
            if let Some(index) = high {
                return index;
            }
        }

        let low = legal
            .iter()
            .copied()
            .filter(|&index| rank_of(index) <= Rank::Eight)
            .min_by_key(|&index| rank_of(index));
        if let Some(index) = low {
            return index;
        }

        legal[0]
    }

    /// Following: win as cheaply as possible while tricks are still
    /// needed; once the bid is made, dump the lowest card that cannot
    /// win. First legal card when neither applies.
    fn choose_follow(hand: &Hand, legal: &[usize], trick: &Trick, needs_tricks: bool) -> usize {
        let card_of = |index: usize| hand.card_at(index).expect("legal index is in hand");

        if needs_tricks {
            let cheapest_winner = legal
                .iter()
                .copied()
                .filter(|&index| trick.would_win(card_of(index)))
                .min_by_key(|&index| card_of(index).rank);
            if let Some(index) = cheapest_winner {
                return index;
            }
        } else {
            let safest_loser = legal
                .iter()
                .copied()
                .filter(|&index| !trick.would_win(card_of(index)))
                .min_by_key(|&index| card_of(index).rank);
            if let Some(index) = safest_loser {
                return index;
            }
        }

        legal[0]
    }
}

#[cfg(test)]
mod tests {
    use super::PlayPlanner;
    use crate::bot::BotDifficulty;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use spades_core::model::card::Card;
    use spades_core::model::hand::Hand;
    use spades_core::model::rank::Rank;
    use spades_core::model::seat::Seat;
    use spades_core::model::suit::Suit;
    use spades_core::model::trick::Trick;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(1)
    }

    fn choose(
        hand: &Hand,
        trick: &Trick,
        bid: u8,
        tricks_won: u8,
        difficulty: BotDifficulty,
    ) -> Option<usize> {
        PlayPlanner::choose(hand, trick, bid, tricks_won, difficulty, &mut rng())
    }

    fn trick_of(plays: &[(Seat, Rank, Suit)]) -> Trick {
        let mut trick = Trick::new();
        for (seat, rank, suit) in plays {
            trick.push(*seat, Card::new(*rank, *suit)).unwrap();
        }
        trick
    }

    #[test]
    fn single_legal_move_is_forced() {
        // Sorted: A♥, 4♦ — hearts led, only the heart is legal.
        let hand = Hand::with_cards(vec![
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Four, Suit::Diamonds),
        ]);
        let trick = trick_of(&[(Seat::South, Rank::Two, Suit::Hearts)]);
        for difficulty in [BotDifficulty::Easy, BotDifficulty::Medium, BotDifficulty::Hard] {
            assert_eq!(choose(&hand, &trick, 3, 0, difficulty), Some(0));
        }
    }

    #[test]
    fn empty_hand_yields_no_move() {
        let hand = Hand::new();
        assert_eq!(choose(&hand, &Trick::new(), 3, 0, BotDifficulty::Medium), None);
    }

    #[test]
    fn easy_choice_is_deterministic_for_a_seeded_rng() {
        let hand = Hand::with_cards(vec![
            Card::new(Rank::Two, Suit::Hearts),
            Card::new(Rank::Five, Suit::Hearts),
            Card::new(Rank::Nine, Suit::Hearts),
            Card::new(Rank::King, Suit::Hearts),
        ]);
        let first = choose(&hand, &Trick::new(), 3, 0, BotDifficulty::Easy);
        let second = choose(&hand, &Trick::new(), 3, 0, BotDifficulty::Easy);
        assert_eq!(first, second);
        assert!(first.is_some());
    }

    #[test]
    fn medium_leads_highest_honor_when_short_of_bid() {
        // Sorted: K♥, J♥, 7♥, 2♥
        let hand = Hand::with_cards(vec![
            Card::new(Rank::Two, Suit::Hearts),
            Card::new(Rank::Seven, Suit::Hearts),
            Card::new(Rank::Jack, Suit::Hearts),
            Card::new(Rank::King, Suit::Hearts),
        ]);
        let index = choose(&hand, &Trick::new(), 3, 0, BotDifficulty::Medium).unwrap();
        assert_eq!(hand.card_at(index), Some(Card::new(Rank::King, Suit::Hearts)));
    }

    #[test]
    fn medium_leads_lowest_weak_card_once_bid_is_made() {
        let hand = Hand::with_cards(vec![
            Card::new(Rank::Two, Suit::Hearts),
            Card::new(Rank::Seven, Suit::Hearts),
            Card::new(Rank::King, Suit::Hearts),
        ]);
        let index = choose(&hand, &Trick::new(), 2, 2, BotDifficulty::Medium).unwrap();
        assert_eq!(hand.card_at(index), Some(Card::new(Rank::Two, Suit::Hearts)));
    }

    #[test]
    fn medium_sacrifices_low_card_when_short_but_holding_no_honor() {
        let hand = Hand::with_cards(vec![
            Card::new(Rank::Three, Suit::Hearts),
            Card::new(Rank::Eight, Suit::Hearts),
        ]);
        let index = choose(&hand, &Trick::new(), 3, 0, BotDifficulty::Medium).unwrap();
        assert_eq!(hand.card_at(index), Some(Card::new(Rank::Three, Suit::Hearts)));
    }

    #[test]
    fn medium_leads_first_legal_when_only_middling_cards_remain() {
        // No card >= jack, none <= eight: fall back to the first legal.
        let hand = Hand::with_cards(vec![
            Card::new(Rank::Nine, Suit::Hearts),
            Card::new(Rank::Ten, Suit::Hearts),
        ]);
        let index = choose(&hand, &Trick::new(), 2, 2, BotDifficulty::Medium).unwrap();
        assert_eq!(index, 0);
    }

    #[test]
    fn medium_wins_as_cheaply_as_possible_when_needing_tricks() {
        // Sorted: A♥, J♥, 3♥ — the jack beats the ten on the table.
        let hand = Hand::with_cards(vec![
            Card::new(Rank::Three, Suit::Hearts),
            Card::new(Rank::Jack, Suit::Hearts),
            Card::new(Rank::Ace, Suit::Hearts),
        ]);
        let trick = trick_of(&[(Seat::South, Rank::Ten, Suit::Hearts)]);
        let index = choose(&hand, &trick, 3, 0, BotDifficulty::Medium).unwrap();
        assert_eq!(hand.card_at(index), Some(Card::new(Rank::Jack, Suit::Hearts)));
    }

    #[test]
    fn medium_ducks_with_lowest_safe_card_once_bid_is_made() {
        let hand = Hand::with_cards(vec![
            Card::new(Rank::Three, Suit::Hearts),
            Card::new(Rank::Nine, Suit::Hearts),
            Card::new(Rank::Ace, Suit::Hearts),
        ]);
        let trick = trick_of(&[(Seat::South, Rank::Ten, Suit::Hearts)]);
        let index = choose(&hand, &trick, 1, 1, BotDifficulty::Medium).unwrap();
        assert_eq!(hand.card_at(index), Some(Card::new(Rank::Three, Suit::Hearts)));
    }

    #[test]
    fn medium_falls_back_when_every_card_would_win() {
        // Bid made, but both cards beat the deuce on the table.
        let hand = Hand::with_cards(vec![
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::Ace, Suit::Hearts),
        ]);
        let trick = trick_of(&[(Seat::South, Rank::Two, Suit::Hearts)]);
        let index = choose(&hand, &trick, 1, 1, BotDifficulty::Medium).unwrap();
        assert_eq!(index, 0);
    }

    #[test]
    fn hard_plays_the_medium_line() {
        let hand = Hand::with_cards(vec![
            Card::new(Rank::Three, Suit::Hearts),
            Card::new(Rank::Jack, Suit::Hearts),
            Card::new(Rank::Ace, Suit::Hearts),
        ]);
        let trick = trick_of(&[(Seat::South, Rank::Ten, Suit::Hearts)]);
        let medium = choose(&hand, &trick, 3, 0, BotDifficulty::Medium);
        let hard = choose(&hand, &trick, 3, 0, BotDifficulty::Hard);
        assert_eq!(medium, hard);
    }

    #[test]
    fn trump_discard_wins_when_void_in_the_lead_suit() {
        // Void in hearts; the low trump is the cheapest winner.
        let hand = Hand::with_cards(vec![
            Card::new(Rank::Two, Suit::Spades),
            Card::new(Rank::Ace, Suit::Diamonds),
        ]);
        let trick = trick_of(&[(Seat::South, Rank::Ace, Suit::Hearts)]);
        let index = choose(&hand, &trick, 3, 0, BotDifficulty::Medium).unwrap();
        assert_eq!(hand.card_at(index), Some(Card::new(Rank::Two, Suit::Spades)));
    }
}
