//! Plain-text rendering and line input for the interactive shell.

use strictly_gridtoe::{Cell, GameSnapshot, GameStatus};

/// One parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place at a zero-based cell.
    Move(Cell),
    /// Start a new game.
    New,
    /// Show the scoreboard.
    Scores,
    /// Show the command list.
    Help,
    /// Leave the game.
    Quit,
}

/// Help text listing the accepted commands.
pub const HELP: &str = "\
Commands:
  <row> <col>   place your mark (1-based, e.g. `2 3` or `2,3`)
  new           start a new game
  scores        show the scoreboard
  help          show this list
  quit          save and exit";

/// Parses one input line against a board of side `size`.
///
/// Coordinates are typed 1-based and returned 0-based. Range checks beyond
/// "positive number" are left to the board.
pub fn parse_input(line: &str, size: usize) -> Result<Input, String> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "" => return Err("type a move like `1 1`, or `help`".to_string()),
        "new" | "n" => return Ok(Input::New),
        "scores" | "s" => return Ok(Input::Scores),
        "help" | "h" | "?" => return Ok(Input::Help),
        "quit" | "q" | "exit" => return Ok(Input::Quit),
        _ => {}
    }

    let parts: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    let [row, col] = parts.as_slice() else {
        return Err(format!("expected `row col`, got `{line}`"));
    };
    let coordinate = |text: &str| -> Result<usize, String> {
        match text.parse::<usize>() {
            Ok(n) if n >= 1 => Ok(n - 1),
            _ => Err(format!("`{text}` is not a number from 1 to {size}")),
        }
    };
    Ok(Input::Move(Cell::new(coordinate(*row)?, coordinate(*col)?)))
}

/// Renders the board with 1-based headers. Winning cells are bracketed.
pub fn render_snapshot(snapshot: &GameSnapshot) -> String {
    let size = *snapshot.size();
    let width = snapshot
        .players()
        .iter()
        .map(|p| p.symbol().chars().count())
        .max()
        .unwrap_or(1)
        + 2;
    let winning = snapshot.status().winning_cells();

    let mut out = String::from("   ");
    for col in 1..=size {
        out.push_str(&format!("{:^width$}", col));
    }
    out.push('\n');
    for (row, squares) in snapshot.cells().iter().enumerate() {
        out.push_str(&format!("{:>2} ", row + 1));
        for (col, square) in squares.iter().enumerate() {
            let text = square.as_deref().unwrap_or(".");
            let text = if winning.contains(&Cell::new(row, col)) {
                format!("[{text}]")
            } else {
                text.to_string()
            };
            out.push_str(&format!("{:^width$}", text));
        }
        out.push('\n');
    }
    out
}

/// One line describing whose turn it is or how the game ended.
pub fn status_line(snapshot: &GameSnapshot) -> String {
    match snapshot.status() {
        GameStatus::InProgress => {
            let player = snapshot.current_player();
            format!("{} ({}) to move", player.name(), player.symbol())
        }
        GameStatus::Won { .. } => match snapshot.winner() {
            Some(player) => format!("{} ({}) wins!", player.name(), player.symbol()),
            None => "Game over".to_string(),
        },
        GameStatus::Draw => "It's a draw.".to_string(),
    }
}

/// The scoreboard, one line per player.
pub fn render_scores(snapshot: &GameSnapshot) -> String {
    snapshot
        .players()
        .iter()
        .map(|p| {
            format!(
                "{} ({}): {} won of {} played",
                p.name(),
                p.symbol(),
                p.score(),
                p.games_played()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
