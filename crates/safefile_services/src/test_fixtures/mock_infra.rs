//! In-memory infrastructure for state machine tests.
//!
//! [`MockFileService`] keeps a flat map of paths to files or directories and
//! records every mutation it applies. A mutation budget can be set to make
//! the N+1th mutation fail, which stands in for the process dying at that
//! point; optionally the failing write leaves a truncated payload behind.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use bytes::Bytes;
use safefile_app::{
    FileInfoInfra, FileReaderInfra, FileRemoverInfra, FileRenamerInfra, FileWriterInfra,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    File(Bytes),
    Dir,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Write(PathBuf),
    Rename(PathBuf, PathBuf),
    Remove(PathBuf),
}

impl Mutation {
    pub fn write(path: impl Into<PathBuf>) -> Self {
        Self::Write(path.into())
    }

    pub fn rename(from: impl Into<PathBuf>, to: impl Into<PathBuf>) -> Self {
        Self::Rename(from.into(), to.into())
    }

    pub fn remove(path: impl Into<PathBuf>) -> Self {
        Self::Remove(path.into())
    }
}

#[derive(Debug, Default)]
pub struct MockFileService {
    entries: Mutex<BTreeMap<PathBuf, Entry>>,
    mutations: Mutex<Vec<Mutation>>,
    budget: Mutex<Option<usize>>,
    torn_writes: Mutex<bool>,
    fail_reads: Mutex<bool>,
}

impl MockFileService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&self, path: impl Into<PathBuf>, content: impl Into<Bytes>) {
        self.entries
            .lock()
            .unwrap()
            .insert(path.into(), Entry::File(content.into()));
    }

    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        self.entries.lock().unwrap().insert(path.into(), Entry::Dir);
    }

    /// Lets `mutations` more mutations succeed, then fails every one after.
    pub fn crash_after(&self, mutations: usize) {
        *self.budget.lock().unwrap() = Some(mutations);
    }

    /// Lifts the mutation budget, as a restarted process would see it.
    pub fn restart(&self) {
        *self.budget.lock().unwrap() = None;
    }

    /// A write that hits the budget stores the first half of its payload.
    pub fn torn_writes(&self, torn: bool) {
        *self.torn_writes.lock().unwrap() = torn;
    }

    pub fn fail_reads(&self, fail: bool) {
        *self.fail_reads.lock().unwrap() = fail;
    }

    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        match self.entries.lock().unwrap().get(path.as_ref()) {
            Some(Entry::File(bytes)) => Some(String::from_utf8_lossy(bytes).into_owned()),
            _ => None,
        }
    }

    /// Paths of every file entry, sorted.
    pub fn files(&self) -> Vec<PathBuf> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, entry)| matches!(entry, Entry::File(_)))
            .map(|(path, _)| path.clone())
            .collect()
    }

    pub fn mutations(&self) -> Vec<Mutation> {
        self.mutations.lock().unwrap().clone()
    }

    fn admit(&self) -> anyhow::Result<()> {
        let mut budget = self.budget.lock().unwrap();
        match budget.as_mut() {
            Some(0) => Err(anyhow::anyhow!("Injected crash")),
            Some(remaining) => {
                *remaining -= 1;
                Ok(())
            }
            None => Ok(()),
        }
    }

    fn record(&self, mutation: Mutation) {
        self.mutations.lock().unwrap().push(mutation);
    }
}

impl FileInfoInfra for MockFileService {
    fn exists(&self, path: &Path) -> anyhow::Result<bool> {
        Ok(self.entries.lock().unwrap().contains_key(path))
    }

    fn is_file(&self, path: &Path) -> anyhow::Result<bool> {
        Ok(matches!(
            self.entries.lock().unwrap().get(path),
            Some(Entry::File(_))
        ))
    }

    fn is_dir(&self, path: &Path) -> anyhow::Result<bool> {
        Ok(matches!(self.entries.lock().unwrap().get(path), Some(Entry::Dir)))
    }
}

impl FileReaderInfra for MockFileService {
    fn read(&self, path: &Path) -> anyhow::Result<Vec<u8>> {
        if *self.fail_reads.lock().unwrap() {
            return Err(anyhow::anyhow!("Injected read failure: {}", path.display()));
        }
        match self.entries.lock().unwrap().get(path) {
            Some(Entry::File(bytes)) => Ok(bytes.to_vec()),
            Some(Entry::Dir) => Err(anyhow::anyhow!("Is a directory: {}", path.display())),
            None => Err(anyhow::anyhow!("File not found: {}", path.display())),
        }
    }
}

impl FileWriterInfra for MockFileService {
    fn write(&self, path: &Path, contents: Bytes) -> anyhow::Result<()> {
        if matches!(self.entries.lock().unwrap().get(path), Some(Entry::Dir)) {
            return Err(anyhow::anyhow!("Is a directory: {}", path.display()));
        }
        if let Err(crash) = self.admit() {
            if *self.torn_writes.lock().unwrap() {
                let torn = contents.slice(..contents.len() / 2);
                self.entries
                    .lock()
                    .unwrap()
                    .insert(path.to_path_buf(), Entry::File(torn));
            }
            return Err(crash);
        }
        self.entries
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), Entry::File(contents));
        self.record(Mutation::write(path));
        Ok(())
    }
}

impl FileRenamerInfra for MockFileService {
    fn rename(&self, from: &Path, to: &Path) -> anyhow::Result<()> {
        self.admit()?;
        let mut entries = self.entries.lock().unwrap();
        if matches!(entries.get(to), Some(Entry::Dir)) {
            return Err(anyhow::anyhow!("Is a directory: {}", to.display()));
        }
        let entry = entries
            .remove(from)
            .ok_or_else(|| anyhow::anyhow!("File not found: {}", from.display()))?;
        entries.insert(to.to_path_buf(), entry);
        drop(entries);
        self.record(Mutation::rename(from, to));
        Ok(())
    }
}

impl FileRemoverInfra for MockFileService {
    fn remove(&self, path: &Path) -> anyhow::Result<()> {
        self.admit()?;
        let mut entries = self.entries.lock().unwrap();
        match entries.get(path) {
            Some(Entry::File(_)) => {
                entries.remove(path);
            }
            Some(Entry::Dir) => return Err(anyhow::anyhow!("Is a directory: {}", path.display())),
            None => return Err(anyhow::anyhow!("File not found: {}", path.display())),
        }
        drop(entries);
        self.record(Mutation::remove(path));
        Ok(())
    }
}
