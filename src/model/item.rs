// File: ./src/model/item.rs
use chrono::NaiveDateTime;
use std::fmt;

/// Pattern used to read timestamps from input and to write them to the save file.
pub const STORAGE_PATTERN: &str = "%m%d%Y %H%M";
/// The same pattern, spelled the way users are asked to type it.
pub const STORAGE_PATTERN_HINT: &str = "MMddyyyy HHmm";
/// Pattern used when showing timestamps to the user.
pub const DISPLAY_PATTERN: &str = "%b %d %Y, %I:%M%p";

/// Who a rendering is meant for. Selects the timestamp pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    Machine,
    Human,
}

impl Audience {
    pub fn format(self, dt: &NaiveDateTime) -> String {
        match self {
            Audience::Machine => dt.format(STORAGE_PATTERN).to_string(),
            Audience::Human => dt.format(DISPLAY_PATTERN).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline {
        due: NaiveDateTime,
    },
    // No ordering is enforced between start and end.
    Event {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl TaskKind {
    pub fn tag(&self) -> char {
        match self {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    completed: bool,
    pub kind: TaskKind,
}

impl Task {
    /// Builds a task from already-validated parts. The fallible constructors
    /// in `parser.rs` are the way in from raw text.
    pub(crate) fn from_parts(description: String, kind: TaskKind) -> Self {
        Self {
            description,
            completed: false,
            kind,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_done(&self) -> bool {
        self.completed
    }

    pub fn mark_done(&mut self) {
        self.completed = true;
    }

    pub fn mark_undone(&mut self) {
        self.completed = false;
    }

    pub fn render(&self, audience: Audience) -> String {
        let check = if self.completed { "[X]" } else { "[ ]" };
        let base = format!("[{}]{} {}", self.kind.tag(), check, self.description);
        match &self.kind {
            TaskKind::Todo => base,
            TaskKind::Deadline { due } => format!("{} (By: {})", base, audience.format(due)),
            TaskKind::Event { start, end } => format!(
                "{} (From: {} To: {})",
                base,
                audience.format(start),
                audience.format(end)
            ),
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Audience::Human))
    }
}
