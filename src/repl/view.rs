use crate::store::TaskList;

pub const GREETING: [&str; 2] = ["Hello! I'm Bob.", "What can I do for you?"];
pub const ADDED: &str = "Sure! I'll add that in for you.";
pub const MARKED: &str = "Nicely done! Keep it up!";
pub const UNMARKED: &str = "Sure, I'll uncheck that task!";
pub const DELETED: &str = "Got it! I've removed that task for you.";
pub const BYE: &str = "Bye. Hope to see you again soon!";

/// Full listing followed by the task count.
pub fn list(tasks: &TaskList) -> Vec<String> {
    let mut lines = tasks.listing();
    lines.push(format!("You have {} tasks in your list.", tasks.len()));
    lines
}

pub fn remaining(tasks: &TaskList) -> String {
    format!("You now have {} tasks in your list.", tasks.len())
}

pub fn find_results(found: &TaskList, term: &str) -> Vec<String> {
    let mut lines = found.listing();
    lines.push(match found.len() {
        1 => format!("There is 1 task containing the word \"{}\".", term),
        n => format!("There are {} tasks containing the word \"{}\".", n, term),
    });
    lines
}
