//! One-shot completion signal between the watcher and the main routine.

use tokio::sync::oneshot;

/// Create a linked writer/reader pair.
pub fn completion() -> (Completion, CompletionWaiter) {
    let (tx, rx) = oneshot::channel();
    (Completion { tx }, CompletionWaiter { rx })
}

/// Writer half. Consumed by [`Completion::notify`], so it can be written at
/// most once.
#[derive(Debug)]
pub struct Completion {
    tx: oneshot::Sender<()>,
}

impl Completion {
    /// Tell the main routine that shutdown bookkeeping has finished.
    pub fn notify(self) {
        // The reader only goes away when the process is already exiting.
        let _ = self.tx.send(());
    }
}

/// Reader half, held by the main routine.
#[derive(Debug)]
pub struct CompletionWaiter {
    rx: oneshot::Receiver<()>,
}

impl CompletionWaiter {
    /// Block until the writer notifies.
    ///
    /// Returns `false` if the writer was dropped without notifying.
    pub async fn wait(self) -> bool {
        self.rx.await.is_ok()
    }
}
