// File: ./src/model/parser.rs
// Builds tasks from raw text, validating every timestamp up front.
use crate::error::BotError;
use crate::model::item::{STORAGE_PATTERN, STORAGE_PATTERN_HINT, Task, TaskKind};
use chrono::NaiveDateTime;

/// Parses `MMddyyyy HHmm`. The text must have exactly that shape: chrono on its
/// own would also accept shorter numeric fields.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, BotError> {
    let raw = raw.trim();
    let time_format_error = || BotError::TimeFormat {
        input: raw.to_string(),
        pattern: STORAGE_PATTERN_HINT,
    };

    let bytes = raw.as_bytes();
    let shaped = bytes.len() == 13
        && bytes[8] == b' '
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 8 || b.is_ascii_digit());
    if !shaped {
        return Err(time_format_error());
    }

    NaiveDateTime::parse_from_str(raw, STORAGE_PATTERN).map_err(|_| time_format_error())
}

fn clean_description(raw: &str) -> Result<String, BotError> {
    let description = raw.trim();
    if description.is_empty() {
        return Err(BotError::CommandSyntax(
            "Please provide a task description.".to_string(),
        ));
    }
    if description.contains('|') {
        return Err(BotError::CommandSyntax(
            "Task descriptions cannot contain the '|' character.".to_string(),
        ));
    }
    Ok(description.to_string())
}

impl Task {
    pub fn todo(description: &str) -> Result<Self, BotError> {
        Ok(Self::from_parts(clean_description(description)?, TaskKind::Todo))
    }

    pub fn deadline(description: &str, by: &str) -> Result<Self, BotError> {
        let description = clean_description(description)?;
        let due = parse_timestamp(by)?;
        Ok(Self::from_parts(description, TaskKind::Deadline { due }))
    }

    pub fn event(description: &str, from: &str, to: &str) -> Result<Self, BotError> {
        let description = clean_description(description)?;
        let start = parse_timestamp(from)?;
        let end = parse_timestamp(to)?;
        Ok(Self::from_parts(description, TaskKind::Event { start, end }))
    }
}
