use crate::error::RecordError;
use crate::model::Task;
use crate::store::TaskList;
use anyhow::{Context, Result};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

pub struct LocalStorage;

impl LocalStorage {
    /// Atomic write: Write to .tmp file then rename
    pub fn atomic_write<P: AsRef<Path>>(path: P, lines: &[String]) -> Result<()> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("tmp");
        {
            let file = fs::File::create(&tmp_path)
                .with_context(|| format!("creating {}", tmp_path.display()))?;
            let mut writer = BufWriter::new(file);
            for line in lines {
                writeln!(writer, "{}", line)?;
            }
            writer.flush()?;
        }
        fs::rename(&tmp_path, path)
            .with_context(|| format!("replacing {}", path.display()))?;
        Ok(())
    }

    pub fn serialize(tasks: &TaskList) -> Vec<String> {
        tasks.iter().map(Task::to_storage_line).collect()
    }

    /// Best-effort: a line that cannot be read is logged and skipped.
    pub fn deserialize<'a, I>(lines: I) -> TaskList
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self::collect_records(lines.into_iter().map(Ok))
    }

    /// Like `deserialize`, but each line is decoded on its own, so one bad
    /// byte only costs the line it sits on.
    pub fn deserialize_bytes(raw: &[u8]) -> TaskList {
        Self::collect_records(raw.split(|b| *b == b'\n').map(|line| {
            std::str::from_utf8(line).map_err(|e| RecordError::Encoding(e.to_string()))
        }))
    }

    fn collect_records<'a, I>(lines: I) -> TaskList
    where
        I: Iterator<Item = Result<&'a str, RecordError>>,
    {
        lines
            .enumerate()
            .filter(|(_, line)| !matches!(line, Ok(l) if l.trim().is_empty()))
            .filter_map(|(n, line)| match line.and_then(Task::from_storage_line) {
                Ok(task) => Some(task),
                Err(e) => {
                    warn!(line = n + 1, error = %e, "skipping unreadable task record");
                    None
                }
            })
            .collect()
    }

    pub fn save<P: AsRef<Path>>(path: P, tasks: &TaskList) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        Self::atomic_write(path, &Self::serialize(tasks))?;
        info!(path = %path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }

    /// A missing file (or directory) means a first run: empty list.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<TaskList> {
        let path = path.as_ref();
        if !path.exists() {
            info!(path = %path.display(), "no save file yet, starting empty");
            return Ok(TaskList::new());
        }
        let raw = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        let tasks = Self::deserialize_bytes(&raw);
        info!(path = %path.display(), count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }
}
