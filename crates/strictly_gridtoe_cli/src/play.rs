//! Interactive line-oriented game loop.

use crate::store::Store;
use crate::terminal::{HELP, Input, parse_input, render_scores, render_snapshot, status_line};
use std::io::{BufRead, Write};
use std::time::Duration;
use strictly_gridtoe::{GameSession, GameSnapshot};
use tracing::{debug, info, instrument};

/// Runs the prompt loop until `quit` or end of input.
///
/// Scores are saved after every finished game and once more on exit.
/// `think` is the pause before an opponent reply is shown.
///
/// # Errors
///
/// Fails on I/O errors on `input`/`out` or when scores cannot be saved.
/// Bad moves are reported to the player and never end the loop.
#[instrument(skip_all, fields(think_ms = think.as_millis() as u64))]
pub fn run<R: BufRead, W: Write>(
    session: &mut GameSession,
    store: &Store,
    think: Duration,
    mut input: R,
    mut out: W,
) -> anyhow::Result<()> {
    let snapshot = session.snapshot();
    writeln!(
        out,
        "{}x{} board, {} in a row wins. Type `help` for commands.",
        snapshot.size(),
        snapshot.size(),
        snapshot.win_condition()
    )?;
    show(&mut out, &snapshot)?;

    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("Input closed");
            break;
        }

        let size = *session.snapshot().size();
        let command = match parse_input(&line, size) {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "{message}")?;
                continue;
            }
        };

        match command {
            Input::Quit => break,
            Input::Help => writeln!(out, "{HELP}")?,
            Input::Scores => writeln!(out, "{}", render_scores(&session.snapshot()))?,
            Input::New => {
                let snapshot = session.new_game();
                show(&mut out, &snapshot)?;
            }
            Input::Move(cell) => {
                let snapshot = match session.submit_move(cell) {
                    Ok(snapshot) => snapshot,
                    Err(e) => {
                        writeln!(out, "{e}")?;
                        continue;
                    }
                };
                if let Some(reply) = session.history().last().filter(|m| m.by_engine) {
                    if !think.is_zero() {
                        out.flush()?;
                        std::thread::sleep(think);
                    }
                    writeln!(
                        out,
                        "Opponent plays {} {}",
                        reply.cell.row + 1,
                        reply.cell.col + 1
                    )?;
                }
                show(&mut out, &snapshot)?;
                if !snapshot.status().is_in_progress() {
                    store.save_players(session.players())?;
                    info!("Game finished, scores saved");
                    writeln!(out, "{}", render_scores(&snapshot))?;
                    writeln!(out, "Type `new` to play again.")?;
                }
            }
        }
    }

    store.save_players(session.players())?;
    writeln!(out, "Bye.")?;
    Ok(())
}

fn show<W: Write>(out: &mut W, snapshot: &GameSnapshot) -> std::io::Result<()> {
    write!(out, "{}", render_snapshot(snapshot))?;
    writeln!(out, "{}", status_line(snapshot))
}
