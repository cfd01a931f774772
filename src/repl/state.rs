use crate::error::BotError;
use crate::model::Task;
use crate::repl::action::Command;
use crate::repl::view;
use crate::storage::LocalStorage;
use crate::store::TaskList;
use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Ready,
    Terminated,
}

/// Owns the task list for the lifetime of the process and turns input lines
/// into reply lines.
pub struct Session {
    pub tasks: TaskList,
    state: SessionState,
    data_path: PathBuf,
}

impl Session {
    pub fn new(tasks: TaskList, data_path: PathBuf) -> Self {
        Self {
            tasks,
            state: SessionState::Ready,
            data_path,
        }
    }

    pub fn is_terminated(&self) -> bool {
        self.state == SessionState::Terminated
    }

    /// Handles one line. Every error becomes a single reply line; only
    /// `exit`/`bye` leaves the Ready state.
    pub fn handle_line(&mut self, line: &str) -> Vec<String> {
        if self.is_terminated() {
            return vec![];
        }
        match Command::parse(line).and_then(|cmd| self.dispatch(cmd)) {
            Ok(lines) => lines,
            Err(e) => {
                debug!(input = line, error = ?e, "command failed");
                vec![e.to_string()]
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        LocalStorage::save(&self.data_path, &self.tasks)
    }

    fn dispatch(&mut self, command: Command) -> Result<Vec<String>, BotError> {
        debug!(?command, "dispatching");
        match command {
            Command::List => Ok(view::list(&self.tasks)),
            Command::Todo(description) => self.add(Task::todo(&description)?),
            Command::Deadline { description, by } => {
                self.add(Task::deadline(&description, &by)?)
            }
            Command::Event {
                description,
                from,
                to,
            } => self.add(Task::event(&description, &from, &to)?),
            Command::Mark(index) => {
                self.tasks.mark(index)?;
                Ok(self.with_listing(&[view::MARKED, ""]))
            }
            Command::Unmark(index) => {
                self.tasks.unmark(index)?;
                Ok(self.with_listing(&[view::UNMARKED, ""]))
            }
            Command::Delete(index) => {
                self.tasks.delete(index)?;
                Ok(vec![
                    view::DELETED.to_string(),
                    view::remaining(&self.tasks),
                ])
            }
            Command::Find(term) => {
                let found = self.tasks.find(&term)?;
                Ok(view::find_results(&found, &term))
            }
            Command::Exit => Ok(self.exit()),
        }
    }

    // The task is fully built before it reaches the list, so a bad
    // timestamp never leaves anything behind.
    fn add(&mut self, task: Task) -> Result<Vec<String>, BotError> {
        let index = self.tasks.add(task);
        debug!(index, "task added");
        Ok(self.with_listing(&[view::ADDED]))
    }

    fn with_listing(&self, header: &[&str]) -> Vec<String> {
        let mut lines: Vec<String> = header.iter().map(|h| h.to_string()).collect();
        lines.extend(view::list(&self.tasks));
        lines
    }

    fn exit(&mut self) -> Vec<String> {
        let mut lines = vec![view::BYE.to_string()];
        if let Err(e) = self.save() {
            error!(path = %self.data_path.display(), error = ?e, "failed to save tasks");
            lines.push(format!("I couldn't save your tasks: {:#}", e));
        }
        self.state = SessionState::Terminated;
        lines
    }
}
