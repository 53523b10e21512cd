use super::*;
use minimax_engine::MinimaxStrategy;
use random_engine::RandomStrategy;
use ttt_core::SearchResult;

/// Always answers with the same cell, legal or not.
struct Stubborn(usize);

impl Strategy for Stubborn {
    fn search(&mut self, _board: &Board, _to_move: Mark) -> SearchResult {
        SearchResult {
            best_move: Some(self.0),
            score: 0,
            nodes: 0,
        }
    }

    fn name(&self) -> &str {
        "Stubborn"
    }
}

#[test]
fn test_self_play() {
    let mut engine1 = MinimaxStrategy::new();
    let mut engine2 = MinimaxStrategy::new();

    let config = MatchConfig {
        num_games: 2,
        verbose: false,
        ..Default::default()
    };

    let runner = MatchRunner::new(config);
    let result = runner.run_match(&mut engine1, &mut engine2).unwrap();

    // Perfect play on both sides always draws
    assert_eq!(result.total_games(), 2);
    assert_eq!(result.draws, 2);
    assert_eq!(result.by_mark.draws, 2);
}

#[test]
fn test_minimax_never_loses_to_random() {
    let mut hard = MinimaxStrategy::new();
    let mut easy = RandomStrategy::seeded(2024);

    let result = quick_match(&mut hard, &mut easy, 40).unwrap();

    assert_eq!(result.total_games(), 40);
    assert_eq!(result.losses, 0);
    assert!(result.wins > 0);
}

#[test]
fn test_tallies_agree() {
    let mut a = RandomStrategy::seeded(1);
    let mut b = RandomStrategy::seeded(2);

    let result = quick_match(&mut a, &mut b, 30).unwrap();

    assert_eq!(result.by_mark.total_games(), 30);
    assert_eq!(result.wins + result.losses, result.by_mark.x_wins + result.by_mark.o_wins);
    assert_eq!(result.draws, result.by_mark.draws);
}

#[test]
fn test_illegal_move_is_reported() {
    let mut stubborn = Stubborn(4);
    let mut other = Stubborn(4);
    let runner = MatchRunner::new(MatchConfig {
        num_games: 1,
        verbose: false,
        ..Default::default()
    });

    let err = runner.run_match(&mut stubborn, &mut other).unwrap_err();

    assert!(matches!(
        err,
        MatchError::IllegalMove {
            source: MoveError::CellOccupied { index: 4 },
            ..
        }
    ));
}

#[test]
fn test_play_game_x_opens() {
    let runner = MatchRunner::new(MatchConfig::default());
    let mut x = Stubborn(0);
    let mut o = MinimaxStrategy::new();

    // X keeps replaying cell 0 after its first move
    let err = runner.play_game(&mut x, &mut o).unwrap_err();
    assert!(matches!(err, MatchError::IllegalMove { strategy, .. } if strategy == "Stubborn"));
}
