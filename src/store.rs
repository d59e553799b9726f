//! Named scenario snapshots persisted to a single JSON file.
//!
//! The file holds `{"scenarios": [...]}`. Saving reads the whole file,
//! appends one record and writes the whole file back. The new contents go
//! to a temp file in the same directory which is then renamed over the old
//! one, so readers never observe a half-written file.
//!
//! There is no locking: two processes saving at the same time both read the
//! old list, and whichever renames last wins. The other save is lost.

use crate::error::{PlannerError, Result};
use crate::models::{Scenario, ScenarioFile};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Append-only store of [`Scenario`] records.
pub struct ScenarioStore {
    path: PathBuf,
}

impl ScenarioStore {
    /// Open the store at `path`, creating the parent directory if needed.
    ///
    /// The file itself is created lazily on the first save.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole file. A missing file is an empty store.
    pub fn load(&self) -> Result<ScenarioFile> {
        if !self.path.exists() {
            return Ok(ScenarioFile::default());
        }
        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(ScenarioFile::default());
        }
        serde_json::from_str(&contents).map_err(|e| {
            tracing::error!("Scenario file {} is not valid: {}", self.path.display(), e);
            PlannerError::from(e)
        })
    }

    /// All scenarios in save order.
    pub fn list(&self) -> Result<Vec<Scenario>> {
        Ok(self.load()?.scenarios)
    }

    /// Names of all saved scenarios, in save order.
    pub fn names(&self) -> Result<Vec<String>> {
        Ok(self.list()?.into_iter().map(|s| s.name).collect())
    }

    /// Most recently saved scenario called `name`.
    pub fn get(&self, name: &str) -> Result<Option<Scenario>> {
        Ok(self.list()?.into_iter().rev().find(|s| s.name == name))
    }

    pub fn count(&self) -> Result<usize> {
        Ok(self.load()?.scenarios.len())
    }

    /// Append `scenario` and rewrite the file.
    ///
    /// Earlier records are never edited or removed; saving a name twice
    /// keeps both records.
    pub fn append(&self, scenario: Scenario) -> Result<()> {
        if scenario.name.trim().is_empty() {
            return Err(PlannerError::InvalidArgument(
                "Scenario name must not be empty".to_string(),
            ));
        }

        let mut file = self.load()?;
        let name = scenario.name.clone();
        file.scenarios.push(scenario);
        self.write(&file)?;

        tracing::info!(
            "Saved scenario '{}' ({} total) to {}",
            name,
            file.scenarios.len(),
            self.path.display()
        );
        Ok(())
    }

    fn write(&self, file: &ScenarioFile) -> Result<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut tmp = NamedTempFile::new_in(&dir)?;
        serde_json::to_writer_pretty(&mut tmp, file)?;
        tmp.write_all(b"\n")?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| PlannerError::Io(e.error))?;
        Ok(())
    }
}
