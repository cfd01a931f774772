use crate::error::BotError;

const DEADLINE_USAGE: &str =
    "Please format your instructions correctly. E.g deadline [task] /by [MMddyyyy HHmm]";
const EVENT_USAGE: &str = "Please format your instructions correctly. E.g event [task] /from [MMddyyyy HHmm] /to [MMddyyyy HHmm]";

/// One parsed line of input. Time strings stay raw here; they are checked when
/// the task is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Todo(String),
    Deadline {
        description: String,
        by: String,
    },
    Event {
        description: String,
        from: String,
        to: String,
    },
    Mark(usize),
    Unmark(usize),
    Delete(usize),
    Find(String),
    Exit,
}

impl Command {
    pub fn parse(input: &str) -> Result<Self, BotError> {
        let input = input.trim();
        let (keyword, arguments) = match input.split_once(char::is_whitespace) {
            Some((k, rest)) => (k, rest.trim()),
            None => (input, ""),
        };

        match keyword.to_lowercase().as_str() {
            "list" => Ok(Command::List),
            "todo" => {
                if arguments.is_empty() {
                    return Err(syntax("Please provide a task description."));
                }
                Ok(Command::Todo(arguments.to_string()))
            }
            "deadline" => {
                let (description, by) = arguments
                    .split_once(" /by ")
                    .ok_or_else(|| syntax(DEADLINE_USAGE))?;
                Ok(Command::Deadline {
                    description: description.to_string(),
                    by: by.to_string(),
                })
            }
            "event" => {
                let (description, span) = arguments
                    .split_once(" /from ")
                    .ok_or_else(|| syntax(EVENT_USAGE))?;
                let (from, to) = span
                    .split_once(" /to ")
                    .ok_or_else(|| syntax(EVENT_USAGE))?;
                Ok(Command::Event {
                    description: description.to_string(),
                    from: from.to_string(),
                    to: to.to_string(),
                })
            }
            "mark" => Ok(Command::Mark(parse_index(arguments)?)),
            "unmark" => Ok(Command::Unmark(parse_index(arguments)?)),
            "delete" => Ok(Command::Delete(parse_index(arguments)?)),
            "find" => {
                if arguments.is_empty() {
                    return Err(syntax("Please provide a search term."));
                }
                Ok(Command::Find(arguments.to_string()))
            }
            "exit" | "bye" => Ok(Command::Exit),
            _ => Err(BotError::UnrecognizedCommand(keyword.to_string())),
        }
    }
}

fn syntax(msg: &str) -> BotError {
    BotError::CommandSyntax(msg.to_string())
}

// Anything that is not a positive number can never name a task.
fn parse_index(arguments: &str) -> Result<usize, BotError> {
    if arguments.is_empty() {
        return Err(syntax("Please provide a task number."));
    }
    arguments
        .parse::<usize>()
        .map_err(|_| BotError::IndexOutOfRange(arguments.to_string()))
}
