//! Integration tests for the background persistence writer over real
//! file-backed storage.

use std::path::PathBuf;
use std::sync::Arc;

use tuido::store::{DATA_FILE_NAME, JsonFileStore, StoreError, TaskStore, spawn_writer};
use tuido::tasks::{Task, TaskId};

fn temp_data_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "tuido-persistence-{name}-{}-{:x}",
        std::process::id(),
        rand::random::<u64>()
    ))
}

fn task(id: u64, text: &str) -> Task {
    Task {
        id: TaskId::from_raw(id),
        task: text.to_string(),
        completed: false,
    }
}

#[tokio::test]
async fn writer_persists_snapshots_to_disk() {
    let dir = temp_data_dir("to-disk");
    let store = Arc::new(JsonFileStore::new(dir.join(DATA_FILE_NAME)));
    let (tx, handle) = spawn_writer(Arc::clone(&store), 16);

    tx.send(vec![task(1, "buy milk")]).await.unwrap();
    tx.send(vec![task(1, "buy milk"), task(2, "water plants")])
        .await
        .unwrap();
    drop(tx);
    handle.await.unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].task, "buy milk");
    assert_eq!(loaded[1].task, "water plants");

    let _ = std::fs::remove_dir_all(dir);
}

#[tokio::test]
async fn writer_shutdown_flushes_pending_snapshot() {
    let dir = temp_data_dir("flush");
    let store = Arc::new(JsonFileStore::new(dir.join(DATA_FILE_NAME)));
    let (tx, handle) = spawn_writer(Arc::clone(&store), 16);

    // Send and immediately close, as the quit path does.
    tx.send(vec![task(7, "last words")]).await.unwrap();
    drop(tx);
    handle.await.unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].task, "last words");

    let _ = std::fs::remove_dir_all(dir);
}

#[tokio::test]
async fn writer_keeps_running_after_write_failure() {
    /// Fails the first `fail_times` saves, then recovers.
    struct FlakyStore {
        inner: JsonFileStore,
        remaining_failures: std::sync::atomic::AtomicUsize,
    }

    impl TaskStore for FlakyStore {
        fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
            let left = self
                .remaining_failures
                .load(std::sync::atomic::Ordering::SeqCst);
            if left > 0 {
                self.remaining_failures
                    .fetch_sub(1, std::sync::atomic::Ordering::SeqCst);
                return Err(StoreError::Write {
                    path: self.inner.path().to_path_buf(),
                    source: std::io::Error::other("disk full"),
                });
            }
            self.inner.save(tasks)
        }

        fn load(&self) -> Result<Vec<Task>, StoreError> {
            self.inner.load()
        }
    }

    let dir = temp_data_dir("flaky");
    let store = Arc::new(FlakyStore {
        inner: JsonFileStore::new(dir.join(DATA_FILE_NAME)),
        remaining_failures: std::sync::atomic::AtomicUsize::new(1),
    });
    let (tx, handle) = spawn_writer(Arc::clone(&store), 16);

    // First snapshot fails and is dropped (not retried); the second is a
    // fresh mutation whose save supersedes the failed one.
    tx.send(vec![task(1, "lost")]).await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    tx.send(vec![task(2, "saved")]).await.unwrap();
    drop(tx);
    handle.await.unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].task, "saved");

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn persisted_file_is_plain_json() {
    let dir = temp_data_dir("format");
    let store = JsonFileStore::new(dir.join(DATA_FILE_NAME));

    let mut done = task(3, "done thing");
    done.completed = true;
    store.save(&[task(9, "open thing"), done]).unwrap();

    let raw = std::fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], 9);
    assert_eq!(items[0]["task"], "open thing");
    assert_eq!(items[0]["completed"], false);
    assert_eq!(items[1]["completed"], true);

    let _ = std::fs::remove_dir_all(dir);
}
