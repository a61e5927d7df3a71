//! Engine-versus-engine matches.

use serde::Serialize;
use strictly_gridtoe::{Difficulty, GameConfig, GameError, GameSession, Mark, Mode, OpponentEngine};
use tracing::{debug, info, instrument};

/// Results of a batch of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Games won by the first seat.
    pub first_wins: u32,
    /// Games won by the second seat.
    pub second_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    /// Total games recorded.
    pub fn games(&self) -> u32 {
        self.first_wins + self.second_wins + self.draws
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "first: {} wins, second: {} wins, draws: {} ({} games)",
            self.first_wins,
            self.second_wins,
            self.draws,
            self.games()
        )
    }
}

/// Plays `games` games between two engines on `config`'s board.
///
/// `first` plays [`Mark::First`] and always opens. Both engines use the
/// configured search depth (sized to the board when unset) and are seeded
/// from `seed`, so a run repeats exactly.
///
/// # Errors
///
/// Returns [`GameError::InvalidConfiguration`] if `config` is invalid.
#[instrument(skip(config), fields(size = config.size(), win_condition = config.win_condition()))]
pub fn simulate(
    config: &GameConfig,
    first: Difficulty,
    second: Difficulty,
    games: u32,
    seed: u64,
) -> Result<Tally, GameError> {
    let config = config.clone().with_mode(Mode::HumanVsHuman);
    let win_condition = *config.win_condition();
    let depth = *config.search_depth();
    let engine = |difficulty: Difficulty, seed: u64| {
        let engine = OpponentEngine::seeded(difficulty, seed);
        match depth {
            Some(depth) => engine.with_search_depth(depth),
            None => engine,
        }
    };
    let mut engines = [engine(first, seed), engine(second, seed.wrapping_add(1))];
    let mut session = GameSession::new(config)?;

    let mut tally = Tally::default();
    for game in 0..games {
        session.new_game();
        while session.status().is_in_progress() {
            let mark = session.current_player();
            let Some(cell) = engines[mark.index()].decide(session.board(), mark, win_condition)
            else {
                break;
            };
            session.submit_move(cell)?;
        }
        match session.status().winner() {
            Some(Mark::First) => tally.first_wins += 1,
            Some(Mark::Second) => tally.second_wins += 1,
            None => tally.draws += 1,
        }
        debug!(game, moves = session.history().len(), winner = ?session.status().winner(), "Game finished");
    }

    info!(%first, %second, %tally, "Simulation finished");
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimax_never_loses_to_random() {
        let tally = simulate(
            &GameConfig::default(),
            Difficulty::Minimax,
            Difficulty::Random,
            20,
            7,
        )
        .unwrap();
        assert_eq!(tally.games(), 20);
        assert_eq!(tally.second_wins, 0);
    }

    #[test]
    fn test_same_seed_same_tally() {
        let config = GameConfig::default().with_size(4).with_win_condition(3);
        let a = simulate(&config, Difficulty::Random, Difficulty::Heuristic, 10, 3).unwrap();
        let b = simulate(&config, Difficulty::Random, Difficulty::Heuristic, 10, 3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig::default().with_size(12);
        assert!(matches!(
            simulate(&config, Difficulty::Random, Difficulty::Random, 1, 0),
            Err(GameError::InvalidConfiguration(_))
        ));
    }
}
