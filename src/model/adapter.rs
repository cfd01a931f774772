// File: ./src/model/adapter.rs
// Handles save-file line serialization/deserialization.
// Loading goes through the same constructors as interactive input, so a
// stored record is held to the same rules as a typed command.
use crate::error::RecordError;
use crate::model::item::{Audience, Task, TaskKind};

pub const FIELD_SEPARATOR: &str = " | ";

impl Task {
    pub fn to_storage_line(&self) -> String {
        let status = if self.is_done() { "1" } else { "0" };
        let mut fields = vec![
            self.kind.tag().to_string(),
            status.to_string(),
            self.description().to_string(),
        ];
        match &self.kind {
            TaskKind::Todo => {}
            TaskKind::Deadline { due } => fields.push(Audience::Machine.format(due)),
            TaskKind::Event { start, end } => {
                fields.push(Audience::Machine.format(start));
                fields.push(Audience::Machine.format(end));
            }
        }
        fields.join(FIELD_SEPARATOR)
    }

    pub fn from_storage_line(line: &str) -> Result<Self, RecordError> {
        let fields: Vec<&str> = line.split('|').map(str::trim).collect();
        let kind = fields[0];

        let expected = match kind {
            "T" => 3,
            "D" => 4,
            "E" => 5,
            _ => return Err(RecordError::UnknownKind(kind.to_string())),
        };
        if fields.len() != expected {
            return Err(RecordError::FieldCount {
                kind: kind.to_string(),
                expected,
                found: fields.len(),
            });
        }

        let mut task = match kind {
            "T" => Task::todo(fields[2])?,
            "D" => Task::deadline(fields[2], fields[3])?,
            _ => Task::event(fields[2], fields[3], fields[4])?,
        };
        if fields[1] == "1" {
            task.mark_done();
        }
        Ok(task)
    }
}
