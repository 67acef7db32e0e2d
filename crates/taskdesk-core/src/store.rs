use crate::{Error, Result, Task};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory task table. Data lives for the process lifetime only.
///
/// Each operation takes the lock once, so individual creates, updates, and
/// deletes are atomic; concurrent writes to the same id are last-write-wins.
#[derive(Clone)]
pub struct TaskStore {
    pub tasks: Arc<RwLock<HashMap<i32, Task>>>,
    next_id: Arc<AtomicI32>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI32::new(1)),
        }
    }

    /// Insert a task and return it with its assigned id.
    ///
    /// A zero id is replaced by the next counter value. A client-supplied
    /// non-zero id is kept, and the counter is advanced past it so later
    /// allocations stay unique.
    pub async fn create(&self, mut task: Task) -> Task {
        if task.id == 0 {
            task.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        } else {
            self.next_id
                .fetch_max(task.id.saturating_add(1), Ordering::SeqCst);
        }

        let mut tasks = self.tasks.write().await;
        tasks.insert(task.id, task.clone());

        tracing::info!("Created task {} ({:?})", task.id, task.name);

        task
    }

    /// Get a task by id.
    pub async fn get(&self, id: i32) -> Option<Task> {
        let tasks = self.tasks.read().await;
        tasks.get(&id).cloned()
    }

    /// List all tasks. Iteration order is unspecified.
    pub async fn list(&self) -> Vec<Task> {
        let tasks = self.tasks.read().await;
        tasks.values().cloned().collect()
    }

    /// List the subset of tasks whose completion flag is set.
    pub async fn list_completed(&self) -> Vec<Task> {
        let tasks = self.tasks.read().await;
        tasks
            .values()
            .filter(|task| task.is_completed)
            .cloned()
            .collect()
    }

    /// Overwrite `name` and `is_completed` of an existing task. The id never
    /// changes.
    pub async fn update(&self, id: i32, input: Task) -> Result<()> {
        let mut tasks = self.tasks.write().await;

        let task = tasks.get_mut(&id).ok_or(Error::TaskNotFound(id))?;
        task.name = input.name;
        task.is_completed = input.is_completed;

        tracing::info!("Updated task {}", id);

        Ok(())
    }

    /// Remove a task and return it.
    pub async fn delete(&self, id: i32) -> Result<Task> {
        let mut tasks = self.tasks.write().await;

        let task = tasks.remove(&id).ok_or(Error::TaskNotFound(id))?;

        tracing::info!("Deleted task {}", id);

        Ok(task)
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
