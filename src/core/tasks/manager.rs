use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::TaskResult;
use crate::{
    core::{
        session,
        CardSet,
    },
    gemini::GeminiClient,
};

/// Runs generation requests off the GUI thread. Each request gets its own
/// worker thread; the async HTTP call runs to completion on the shared
/// runtime and the outcome is delivered through the channel.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));

        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    pub fn generate_deck(&self, topic: String, client: GeminiClient) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                session::generate_deck(&topic, |prompt| async move {
                    client.generate(&prompt).await
                })
                .await
                .map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::DeckGenerated(result));
        });
    }

    pub fn extend_deck(&self, topic: String, existing: CardSet, client: GeminiClient) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                session::extend_deck(&topic, &existing, |prompt| async move {
                    client.generate(&prompt).await
                })
                .await
                .map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::DeckExtended(result));
        });
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}
