//! On-device task list persistence.
//!
//! The whole list is serialized to a single JSON file under a fixed path
//! and rewritten after every mutation. Writes are handed to a background
//! task through [`spawn_writer`], so the UI loop never waits on disk and
//! never learns the outcome of a write: failures are logged and the next
//! mutation's snapshot supersedes the failed one. Nothing is retried.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::tasks::Task;

/// File name of the persisted task list inside the data directory.
pub const DATA_FILE_NAME: &str = "tasks.json";

/// Errors that can occur during persistence operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Failed to read the data file.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to write the data file.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to serialize the task list.
    #[error("failed to encode task list: {0}")]
    Encode(#[source] serde_json::Error),

    /// Failed to deserialize the stored task list.
    #[error("failed to decode task list: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Trait for persisting the task list between launches.
///
/// `save` overwrites the full stored list; `load` reads it back once at
/// startup. Implementations: [`JsonFileStore`] for real on-device storage,
/// [`InMemoryStore`] for tests.
pub trait TaskStore: Send + Sync {
    /// Overwrite the stored list with the given snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization or the write fails.
    fn save(&self, tasks: &[Task]) -> Result<(), StoreError>;

    /// Read the stored list.
    ///
    /// A store that has never been written to yields an empty list; that
    /// is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the read or deserialization fails.
    fn load(&self) -> Result<Vec<Task>, StoreError>;
}

/// JSON-file-backed task store.
///
/// The file holds one JSON array of task objects. Writes go through a
/// temp file and a rename, so a failed write never truncates the
/// previously saved list.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default platform data file path (`<data dir>/tuido/tasks.json`).
    ///
    /// Returns `None` if the platform data directory cannot be determined.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("tuido").join(DATA_FILE_NAME))
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskStore for JsonFileStore {
    fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let json = serde_json::to_string(tasks).map_err(StoreError::Encode)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Write {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(|e| StoreError::Write {
            path: tmp.clone(),
            source: e,
        })?;
        std::fs::rename(&tmp, &self.path).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: e,
        })
    }

    fn load(&self) -> Result<Vec<Task>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => serde_json::from_str(&contents).map_err(StoreError::Decode),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(StoreError::Read {
                path: self.path.clone(),
                source: e,
            }),
        }
    }
}

/// In-memory implementation of [`TaskStore`] for testing.
///
/// Holds the last saved snapshot and counts saves, so tests can assert
/// the one-snapshot-per-mutation contract. Not persistent.
#[derive(Default)]
pub struct InMemoryStore {
    tasks: parking_lot::Mutex<Vec<Task>>,
    save_count: std::sync::atomic::AtomicUsize,
}

impl InMemoryStore {
    /// Creates a new, empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `save` calls observed so far.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.save_count.load(std::sync::atomic::Ordering::SeqCst)
    }
}

impl TaskStore for InMemoryStore {
    fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        *self.tasks.lock() = tasks.to_vec();
        self.save_count
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Ok(())
    }

    fn load(&self) -> Result<Vec<Task>, StoreError> {
        Ok(self.tasks.lock().clone())
    }
}

/// Spawns the background persistence task.
///
/// The returned sender accepts full task-list snapshots. Before each write
/// the task drains any queued snapshots down to the most recent one, so a
/// snapshot superseded while a write was pending is never written. Write
/// failures are logged and dropped. Closing the sender makes the task
/// write whatever snapshot is still pending and then stop, so awaiting the
/// join handle after drop flushes the final state.
pub fn spawn_writer<S>(
    store: Arc<S>,
    capacity: usize,
) -> (mpsc::Sender<Vec<Task>>, tokio::task::JoinHandle<()>)
where
    S: TaskStore + 'static,
{
    let (tx, mut rx) = mpsc::channel::<Vec<Task>>(capacity);

    let handle = tokio::spawn(async move {
        while let Some(mut snapshot) = rx.recv().await {
            // Only the newest pending snapshot matters.
            while let Ok(newer) = rx.try_recv() {
                snapshot = newer;
            }

            let store = Arc::clone(&store);
            match tokio::task::spawn_blocking(move || store.save(&snapshot)).await {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    tracing::warn!(error = %err, "task list save failed, list kept in memory only");
                }
                Err(err) => {
                    tracing::warn!(error = %err, "persistence write task panicked");
                }
            }
        }
    });

    (tx, handle)
}
