use crate::game::serialization::RosterSnapshot;
use crate::model::roster::Roster;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access statistics file {path:?}: {source}")]
    Io {
        #[source]
        source: io::Error,
        path: PathBuf,
    },
    #[error("failed to encode statistics for {path:?}: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
        path: PathBuf,
    },
}

impl StoreError {
    pub fn path(&self) -> &Path {
        match self {
            StoreError::Io { path, .. } | StoreError::Encode { path, .. } => path.as_path(),
        }
    }
}

/// How the last load went. Anything other than `Loaded` leaves the roster empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded(usize),
    Missing,
    Empty,
    Corrupt(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub roster: Roster,
    pub status: LoadStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStatus {
    Written(PathBuf),
    /// Nothing to persist; the file was left untouched.
    Skipped,
}

/// Reads and writes the roster file.
#[derive(Debug, Clone)]
pub struct StatisticsStore {
    path: PathBuf,
}

impl StatisticsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Never fails: missing, blank or unreadable files all yield an empty roster.
    pub fn load(&self) -> LoadReport {
        let (roster, status) = match fs::read_to_string(&self.path) {
            Ok(json) if json.trim().is_empty() => {
                warn!(path = %self.path.display(), "statistics file is empty");
                (Roster::new(), LoadStatus::Empty)
            }
            Ok(json) => match RosterSnapshot::from_json(&json) {
                Ok(roster) => {
                    info!(path = %self.path.display(), players = roster.len(), "statistics loaded");
                    let count = roster.len();
                    (roster, LoadStatus::Loaded(count))
                }
                Err(err) => {
                    warn!(path = %self.path.display(), error = %err, "statistics file is corrupt");
                    (Roster::new(), LoadStatus::Corrupt(err.to_string()))
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "statistics file not found, starting fresh");
                (Roster::new(), LoadStatus::Missing)
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "statistics file is unreadable");
                (Roster::new(), LoadStatus::Corrupt(err.to_string()))
            }
        };
        LoadReport { roster, status }
    }

    /// Overwrites the whole file in one write. Empty rosters are not written.
    pub fn save(&self, roster: &Roster) -> Result<SaveStatus, StoreError> {
        if roster.is_empty() {
            info!(path = %self.path.display(), "no statistics to save");
            return Ok(SaveStatus::Skipped);
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                source,
                path: parent.to_path_buf(),
            })?;
        }

        let json = RosterSnapshot::to_json(roster).map_err(|source| StoreError::Encode {
            source,
            path: self.path.clone(),
        })?;
        fs::write(&self.path, json).map_err(|source| StoreError::Io {
            source,
            path: self.path.clone(),
        })?;

        info!(path = %self.path.display(), players = roster.len(), "statistics saved");
        Ok(SaveStatus::Written(self.path.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::{LoadStatus, SaveStatus, StatisticsStore};
    use crate::model::outcome::Outcome;
    use crate::model::roster::Roster;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_empty_roster() {
        let dir = tempdir().unwrap();
        let store = StatisticsStore::new(dir.path().join("pontuacoes.json"));
        let report = store.load();
        assert!(report.roster.is_empty());
        assert_eq!(report.status, LoadStatus::Missing);
    }

    #[test]
    fn whitespace_file_loads_empty_roster() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pontuacoes.json");
        fs::write(&path, "  \n").unwrap();
        let report = StatisticsStore::new(&path).load();
        assert!(report.roster.is_empty());
        assert_eq!(report.status, LoadStatus::Empty);
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Jokempo").join("pontuacoes.json");
        let store = StatisticsStore::new(&path);
        let mut roster = Roster::new();
        roster.record("Ana", Outcome::Draw);
        assert_eq!(store.save(&roster).unwrap(), SaveStatus::Written(path.clone()));
        assert!(path.exists());
    }

    #[test]
    fn empty_roster_is_not_written() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pontuacoes.json");
        let store = StatisticsStore::new(&path);
        assert_eq!(store.save(&Roster::new()).unwrap(), SaveStatus::Skipped);
        assert!(!path.exists());
    }

    #[test]
    fn save_into_unwritable_location_reports_error() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let store = StatisticsStore::new(blocker.join("pontuacoes.json"));
        let mut roster = Roster::new();
        roster.record("Ana", Outcome::PlayerWins);
        let err = store.save(&roster).unwrap_err();
        assert_eq!(err.path(), blocker.as_path());
    }
}
