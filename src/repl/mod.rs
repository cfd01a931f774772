// File: ./src/repl/mod.rs
pub mod action;
pub mod state;
pub mod view;

use crate::storage::LocalStorage;
use anyhow::Result;
use state::Session;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;

/// Loads the saved list, then talks to the user over stdin/stdout until `bye`.
pub fn run(path: PathBuf) -> Result<()> {
    let tasks = LocalStorage::load(&path)?;
    let mut session = Session::new(tasks, path);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(&mut session, stdin.lock(), stdout.lock())
}

pub fn run_with<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    mut output: W,
) -> Result<()> {
    for line in view::GREETING {
        writeln!(output, "{}", line)?;
    }
    output.flush()?;

    let mut buf = Vec::new();
    while !session.is_terminated() {
        buf.clear();
        let reply = if input.read_until(b'\n', &mut buf)? == 0 {
            // Closed input still saves, same as an explicit exit.
            info!("input closed, exiting");
            session.handle_line("bye")
        } else {
            // Invalid bytes must not end the session before it can save.
            session.handle_line(&String::from_utf8_lossy(&buf))
        };
        for line in reply {
            writeln!(output, "{}", line)?;
        }
        output.flush()?;
    }
    Ok(())
}
