//! Cancellable fire-and-forget tasks on the local (single-threaded) executor.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use std::future::Future;

use futures::future::{AbortHandle, abortable};
use futures::task::{LocalSpawn, LocalSpawnExt};

use crate::error::PageError;

/// Cancellation token for a spawned task.
///
/// Dropping the handle does not cancel the task.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    name: &'static str,
    abort: AbortHandle,
}

impl TaskHandle {
    /// Stop the task at its next suspension point.
    pub fn cancel(&self) {
        if !self.is_cancelled() {
            log::debug!("cancelling task {}", self.name);
            self.abort.abort();
        }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }
}

/// Spawn `fut` on `spawner` and return a handle that can cancel it.
pub fn spawn_cancellable<F>(spawner: &dyn LocalSpawn, name: &'static str, fut: F) -> Result<TaskHandle, PageError>
where
    F: Future<Output = ()> + 'static,
{
    let (task, abort) = abortable(fut);
    spawner
        .spawn_local(async move {
            if task.await.is_err() {
                log::debug!("task {name} stopped before completion");
            }
        })
        .map_err(|err| PageError::Spawn(format!("{name}: {err}")))?;
    Ok(TaskHandle { name, abort })
}

/// Spawner that hands futures to the browser microtask queue.
#[cfg(feature = "hydrate")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserSpawner;

#[cfg(feature = "hydrate")]
impl LocalSpawn for BrowserSpawner {
    fn spawn_local_obj(
        &self,
        future: futures::future::LocalFutureObj<'static, ()>,
    ) -> Result<(), futures::task::SpawnError> {
        wasm_bindgen_futures::spawn_local(future);
        Ok(())
    }
}
