// File: ./src/store.rs
use crate::error::BotError;
use crate::model::Task;

/// Ordered task collection. Insertion order is display order; the indices
/// taken and returned here are 1-based, as the user sees them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends and returns the new task's 1-based index.
    pub fn add(&mut self, task: Task) -> usize {
        self.tasks.push(task);
        self.tasks.len()
    }

    pub fn delete(&mut self, index: usize) -> Result<Task, BotError> {
        let i = self.position(index)?;
        Ok(self.tasks.remove(i))
    }

    pub fn mark(&mut self, index: usize) -> Result<(), BotError> {
        let i = self.position(index)?;
        self.tasks[i].mark_done();
        Ok(())
    }

    pub fn unmark(&mut self, index: usize) -> Result<(), BotError> {
        let i = self.position(index)?;
        self.tasks[i].mark_undone();
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.position(index).ok().map(|i| &self.tasks[i])
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// New collection of every task whose description contains `term`
    /// (case-sensitive), in list order.
    pub fn find(&self, term: &str) -> Result<TaskList, BotError> {
        if term.is_empty() {
            return Err(BotError::CommandSyntax(
                "Please provide a search term.".to_string(),
            ));
        }
        Ok(self
            .tasks
            .iter()
            .filter(|t| t.description().contains(term))
            .cloned()
            .collect())
    }

    /// Numbered, human-readable lines.
    pub fn listing(&self) -> Vec<String> {
        self.tasks
            .iter()
            .enumerate()
            .map(|(i, t)| format!("{}. {}", i + 1, t))
            .collect()
    }

    fn position(&self, index: usize) -> Result<usize, BotError> {
        if index == 0 || index > self.tasks.len() {
            return Err(BotError::IndexOutOfRange(index.to_string()));
        }
        Ok(index - 1)
    }
}

impl FromIterator<Task> for TaskList {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().collect(),
        }
    }
}
