use crate::model::seat::Seat;

/// Per-round scores from bids and tricks taken: a made bid is worth ten
/// points per bid trick plus one per overtrick; a missed bid loses the
/// full ten per bid trick. No bags, no nil bonus.
pub fn score_round(bids: [u8; 4], tricks_won: [u8; 4]) -> [i32; 4] {
    let mut scores = [0i32; 4];
    for i in 0..4 {
        let bid = i32::from(bids[i]);
        let tricks = i32::from(tricks_won[i]);
        scores[i] = if tricks >= bid {
            bid * 10 + (tricks - bid)
        } else {
            -(bid * 10)
        };
    }
    scores
}

/// First seat (lowest index breaks ties) at or above the target score.
pub fn check_winner(totals: &[i32; 4], winning_score: i32) -> Option<Seat> {
    Seat::LOOP
        .iter()
        .copied()
        .find(|seat| totals[seat.index()] >= winning_score)
}

/// Cumulative match totals across rounds. Totals can go negative under
/// repeated missed bids; no floor is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBoard {
    totals: [i32; 4],
}

impl ScoreBoard {
    pub const fn new() -> Self {
        Self { totals: [0; 4] }
    }

    pub fn apply_round(&mut self, round_scores: [i32; 4]) {
        for (total, delta) in self.totals.iter_mut().zip(round_scores) {
            *total += delta;
        }
    }

    pub fn set_totals(&mut self, totals: [i32; 4]) {
        self.totals = totals;
    }

    pub fn score(&self, seat: Seat) -> i32 {
        self.totals[seat.index()]
    }

    pub fn totals(&self) -> &[i32; 4] {
        &self.totals
    }

    pub fn winner(&self, winning_score: i32) -> Option<Seat> {
        check_winner(&self.totals, winning_score)
    }
}

#[cfg(test)]
mod tests {
    use super::{ScoreBoard, check_winner, score_round};
    use crate::model::seat::Seat;

    #[test]
    fn made_bid_scores_ten_per_trick() {
        let scores = score_round([5, 0, 0, 0], [5, 0, 0, 0]);
        assert_eq!(scores[0], 50);
    }

    #[test]
    fn overtricks_add_one_point_each() {
        let scores = score_round([5, 0, 0, 0], [7, 0, 0, 0]);
        assert_eq!(scores[0], 52);
    }

    #[test]
    fn missed_bid_loses_the_full_bid() {
        let scores = score_round([5, 0, 0, 0], [3, 0, 0, 0]);
        assert_eq!(scores[0], -50);
    }

    #[test]
    fn zero_bid_zero_tricks_scores_flat_zero() {
        let scores = score_round([0, 0, 0, 0], [0, 0, 0, 0]);
        assert_eq!(scores, [0, 0, 0, 0]);
    }

    #[test]
    fn check_winner_finds_first_seat_over_threshold() {
        assert_eq!(check_winner(&[310, 120, 90, 0], 300), Some(Seat::South));
        assert_eq!(check_winner(&[290, 120, 90, 0], 300), None);
    }

    #[test]
    fn check_winner_breaks_ties_by_lowest_seat() {
        assert_eq!(check_winner(&[0, 310, 320, 0], 300), Some(Seat::West));
    }

    #[test]
    fn scoreboard_accumulates_and_may_go_negative() {
        let mut board = ScoreBoard::new();
        board.apply_round([-50, 30, 0, 52]);
        board.apply_round([-30, 30, 10, 50]);
        assert_eq!(board.score(Seat::South), -80);
        assert_eq!(board.score(Seat::West), 60);
        assert_eq!(board.totals(), &[-80, 60, 10, 102]);
        assert_eq!(board.winner(300), None);
    }
}
