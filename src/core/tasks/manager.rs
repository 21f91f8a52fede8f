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
    api::{
        AnswerChecker,
        HttpWordSource,
        LocalAnswerChecker,
        WordQuery,
        WordSource,
    },
    core::{
        models::Level,
        state::Ticket,
        WordsheetError,
    },
    quiz::{
        engine::shuffle_words,
        PendingCheck,
    },
    sheet::{
        build_sheet,
        PrintRequest,
    },
};

/// Runs network work off the UI thread; results are collected with [`TaskManager::poll_results`].
pub struct TaskManager<S = HttpWordSource> {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
    source: S,
}

impl TaskManager<HttpWordSource> {
    pub fn connect(api_base_url: &str) -> Result<Self, WordsheetError> {
        Self::new(HttpWordSource::new(api_base_url)?)
    }

    pub fn set_api_base_url(&mut self, api_base_url: &str) -> Result<(), WordsheetError> {
        self.source = HttpWordSource::new(api_base_url)?;
        log::info!("Using API at {}", self.source.base_url());
        Ok(())
    }
}

impl<S> TaskManager<S>
where
    S: WordSource + Clone + Send + 'static,
{
    pub fn new(source: S) -> Result<Self, WordsheetError> {
        let runtime = Runtime::new()
            .map_err(|e| WordsheetError::Config(format!("Failed to create task runtime: {e}")))?;
        let (sender, receiver) = mpsc::channel();

        Ok(Self { runtime: Arc::new(runtime), receiver, sender, source })
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            log::debug!("Task finished: {}", result.task_type());
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>, S) {
        (self.sender.clone(), self.runtime.clone(), self.source.clone())
    }

    pub fn load_levels(&self, ticket: Ticket) {
        let (sender, runtime, source) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async { source.fetch_levels().await });
            if let Err(e) = &result {
                log::error!("Loading levels failed: {e}");
            }
            let _ = sender.send(TaskResult::LevelsLoaded { ticket, result });
        });
    }

    pub fn load_quiz_words(&self, ticket: Ticket, level: Level, count: u32, shuffle: bool) {
        let (sender, runtime, source) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                let mut words = source.fetch_words(&level.id, WordQuery::Count(count)).await?;
                if shuffle {
                    shuffle_words(&mut words);
                }
                Ok::<_, WordsheetError>(words)
            });
            if let Err(e) = &result {
                log::error!("Loading quiz words for {} failed: {e}", level.id);
            }
            let _ = sender.send(TaskResult::QuizWordsLoaded { ticket, level, result });
        });
    }

    pub fn generate_sheet(&self, ticket: Ticket, request: PrintRequest) {
        let (sender, runtime, source) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(build_sheet(&source, &request));
            if let Err(e) = &result {
                log::error!("Generating sheet for {} failed: {e}", request.level_id);
            }
            let _ = sender.send(TaskResult::SheetGenerated { ticket, request, result });
        });
    }
}

impl<S> TaskManager<S>
where
    S: WordSource + AnswerChecker + Clone + Send + 'static,
{
    /// Grades locally when `offline` is set, otherwise asks the server.
    pub fn check_answer(&self, pending: PendingCheck, offline: bool) {
        let (sender, runtime, source) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                if offline {
                    LocalAnswerChecker.check(&pending.request).await
                } else {
                    source.check(&pending.request).await
                }
            });
            if let Err(e) = &result {
                log::error!("Checking answer for {:?} failed: {e}", pending.request.word);
            }
            let _ = sender.send(TaskResult::AnswerChecked { pending, result });
        });
    }
}
