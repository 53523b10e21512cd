//! Difficulty labels and the strategy factory

use heuristic_engine::HeuristicStrategy;
use minimax_engine::MinimaxStrategy;
use random_engine::RandomStrategy;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use tracing::warn;
use ttt_core::Strategy;

/// Opponent strength.
///
/// Unknown labels never fail: they fall back to [`Difficulty::Easy`], both
/// when parsed from text and when read from a config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    /// Random moves
    #[default]
    Easy,
    /// Win-or-block, otherwise random
    Medium,
    /// Full minimax
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Exact, lowercase match; anything else is Easy.
    pub fn from_label(label: &str) -> Self {
        match label {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            other => {
                warn!(label = other, "unknown difficulty, using easy");
                Difficulty::Easy
            }
        }
    }

    /// The opponent for this tier, seeded when `seed` is given.
    pub fn strategy(self, seed: Option<u64>) -> Box<dyn Strategy> {
        match seed {
            Some(seed) => create_seeded_strategy(self, seed),
            None => create_strategy(self),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Difficulty::from_label(s))
    }
}

impl From<String> for Difficulty {
    fn from(label: String) -> Self {
        Difficulty::from_label(&label)
    }
}

impl From<Difficulty> for String {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.label().to_string()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Builds the opponent for a difficulty, with an entropy-seeded generator.
pub fn create_strategy(difficulty: Difficulty) -> Box<dyn Strategy> {
    match difficulty {
        Difficulty::Easy => Box::new(RandomStrategy::new()),
        Difficulty::Medium => Box::new(HeuristicStrategy::new()),
        Difficulty::Hard => Box::new(MinimaxStrategy::new()),
    }
}

/// Same as [`create_strategy`] but with a fixed seed for any randomness.
pub fn create_seeded_strategy(difficulty: Difficulty, seed: u64) -> Box<dyn Strategy> {
    match difficulty {
        Difficulty::Easy => Box::new(RandomStrategy::seeded(seed)),
        Difficulty::Medium => Box::new(HeuristicStrategy::seeded(seed)),
        Difficulty::Hard => Box::new(MinimaxStrategy::new()),
    }
}

/// Label → strategy, seeded when `seed` is given.
pub fn strategy_from_label(label: &str, seed: Option<u64>) -> Box<dyn Strategy> {
    Difficulty::from_label(label).strategy(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ttt_core::{Board, Mark};

    #[test]
    fn known_labels_map_to_tiers() {
        assert_eq!(Difficulty::from_label("easy"), Difficulty::Easy);
        assert_eq!(Difficulty::from_label("medium"), Difficulty::Medium);
        assert_eq!(Difficulty::from_label("hard"), Difficulty::Hard);
    }

    #[test]
    fn labels_match_exactly() {
        assert_eq!(Difficulty::from_label("HARD"), Difficulty::Easy);
        assert_eq!(Difficulty::from_label(" Medium "), Difficulty::Easy);
        assert_eq!(Difficulty::from_label("hard "), Difficulty::Easy);
        assert_eq!(strategy_from_label("HARD", Some(1)).name(), "Random");
    }

    #[test]
    fn unknown_label_defaults_to_easy() {
        assert_eq!(Difficulty::from_label("bogus"), Difficulty::Easy);
        assert_eq!(Difficulty::from_label(""), Difficulty::Easy);
        assert_eq!("impossible".parse::<Difficulty>(), Ok(Difficulty::Easy));
    }

    #[test]
    fn factory_names_match_tiers() {
        assert_eq!(create_strategy(Difficulty::Easy).name(), "Random");
        assert_eq!(create_strategy(Difficulty::Medium).name(), "Heuristic");
        assert_eq!(create_strategy(Difficulty::Hard).name(), "Minimax");
    }

    #[test]
    fn bogus_label_plays_like_easy() {
        let mut bogus = strategy_from_label("bogus", Some(5));
        let mut easy = strategy_from_label("easy", Some(5));
        assert_eq!(bogus.name(), easy.name());

        let mut board = Board::new();
        let mut mark = Mark::X;
        while !board.outcome().is_terminal() {
            let a = bogus.choose_move(&board, mark);
            let b = easy.choose_move(&board, mark);
            assert_eq!(a, b);
            board.apply_move(a.unwrap(), mark).unwrap();
            mark = mark.other();
        }
    }

    #[test]
    fn label_round_trips() {
        for difficulty in Difficulty::ALL {
            assert_eq!(Difficulty::from_label(difficulty.label()), difficulty);
            assert_eq!(difficulty.to_string(), difficulty.label());
        }
    }
}
