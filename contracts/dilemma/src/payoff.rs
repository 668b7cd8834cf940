//! Round payoffs and end-of-game settlement.

use crate::game::{Game, Move, Stakes};

/// Score deltas `(player1, player2)` for one round.
///
/// |     | C     | D     |
/// |-----|-------|-------|
/// | C   | 3, 3  | 0, 5  |
/// | D   | 5, 0  | 1, 1  |
pub const fn round_payoff(m1: Move, m2: Move) -> (u32, u32) {
    match (m1, m2) {
        (Move::Cooperate, Move::Cooperate) => (3, 3),
        (Move::Defect, Move::Defect) => (1, 1),
        (Move::Cooperate, Move::Defect) => (0, 5),
        (Move::Defect, Move::Cooperate) => (5, 0),
    }
}

/// Add one round's payoff to the cumulative scores and return the deltas.
pub fn apply_round(game: &mut Game, m1: Move, m2: Move) -> (u32, u32) {
    let (d1, d2) = round_payoff(m1, m2);
    game.p1_score += d1;
    game.p2_score += d2;
    (d1, d2)
}

/// Payouts from the escrowed pot. Always sums to the pot.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settlement {
    pub player1: i128,
    pub player2: i128,
    /// Rounding dust.
    pub treasury: i128,
}

/// Equal scores split the pot evenly. Otherwise each player receives the
/// pot weighted by their share of the combined score, so the higher scorer
/// takes the majority.
pub fn settle(p1_score: u32, p2_score: u32, stakes: &Stakes) -> Settlement {
    let pot = stakes.player1 + stakes.player2;
    let (player1, player2) = if p1_score == p2_score {
        (pot / 2, pot / 2)
    } else {
        let total = (p1_score + p2_score) as i128;
        (
            weighted_share(pot, p1_score as i128, total),
            weighted_share(pot, p2_score as i128, total),
        )
    };
    Settlement {
        player1,
        player2,
        treasury: pot - player1 - player2,
    }
}

/// `floor(pot * score / total)` without forming `pot * score`.
fn weighted_share(pot: i128, score: i128, total: i128) -> i128 {
    (pot / total) * score + (pot % total) * score / total
}

#[cfg(test)]
mod test {
    use super::*;
    use soroban_sdk::{testutils::Address as _, Address, Env};

    fn stakes(player1: i128, player2: i128) -> Stakes {
        Stakes { player1, player2 }
    }

    #[test]
    fn payoff_matrix() {
        use Move::*;
        assert_eq!(round_payoff(Cooperate, Cooperate), (3, 3));
        assert_eq!(round_payoff(Defect, Defect), (1, 1));
        assert_eq!(round_payoff(Cooperate, Defect), (0, 5));
        assert_eq!(round_payoff(Defect, Cooperate), (5, 0));
    }

    #[test]
    fn apply_round_accumulates_scores() {
        let env = Env::default();
        let mut game = Game::new(&env, Address::generate(&env), Address::generate(&env));

        assert_eq!(apply_round(&mut game, Move::Cooperate, Move::Defect), (0, 5));
        assert_eq!(apply_round(&mut game, Move::Cooperate, Move::Cooperate), (3, 3));
        assert_eq!((game.p1_score, game.p2_score), (3, 8));
    }

    #[test]
    fn tie_splits_pot_evenly() {
        let s = settle(15, 15, &stakes(100, 100));
        assert_eq!(s, Settlement { player1: 100, player2: 100, treasury: 0 });

        // Odd pot: the indivisible unit goes to the treasury.
        let s = settle(5, 5, &stakes(50, 51));
        assert_eq!(s, Settlement { player1: 50, player2: 50, treasury: 1 });
    }

    #[test]
    fn higher_scorer_takes_majority() {
        let s = settle(13, 8, &stakes(100, 100));
        assert_eq!(s, Settlement { player1: 123, player2: 76, treasury: 1 });
        assert!(s.player1 > s.player2);

        let s = settle(0, 25, &stakes(100, 100));
        assert_eq!(s, Settlement { player1: 0, player2: 200, treasury: 0 });
    }

    #[test]
    fn settlement_conserves_pot() {
        let pots = [(0, 0), (1, 0), (7, 11), (100_000_000, 100_000_000), (i128::MAX / 4, 3)];
        let scores = [(15, 15), (13, 8), (8, 13), (25, 0), (9, 14), (5, 5)];
        for (a, b) in pots {
            for (p1, p2) in scores {
                let s = settle(p1, p2, &stakes(a, b));
                assert_eq!(s.player1 + s.player2 + s.treasury, a + b);
                assert!(s.player1 >= 0 && s.player2 >= 0 && s.treasury >= 0);
            }
        }
    }

    #[test]
    fn zero_stakes_pay_nothing() {
        assert_eq!(
            settle(13, 8, &stakes(0, 0)),
            Settlement { player1: 0, player2: 0, treasury: 0 }
        );
    }
}
