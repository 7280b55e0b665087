use crate::cache::{DailyCache, FileStore, SystemClock};
use crate::config::Config;
use crate::controller::ThoughtController;
use crate::provider::{GeminiProvider, QuoteProvider};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, MutexGuard};
use tokio::task::JoinHandle;
use tokio::time::timeout;

pub struct BotState {
    pub controller: Mutex<ThoughtController>,
    /// Ticker editing the countdown label, if one is running.
    pub countdown_task: Mutex<Option<JoinHandle<()>>>,
}

impl BotState {
    pub fn new(controller: ThoughtController) -> Self {
        Self {
            controller: Mutex::new(controller),
            countdown_task: Mutex::new(None),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let provider: Arc<dyn QuoteProvider> = Arc::new(GeminiProvider::new(
            config.gemini_api_key.clone(),
            config.gemini_model.clone(),
            config.gemini_base_url.clone(),
        ));
        let cache = DailyCache::new(
            Box::new(FileStore::new(config.store_dir.clone())),
            Arc::new(SystemClock),
        );
        Self::new(ThoughtController::new(cache, provider, StdRng::from_entropy()))
    }

    /// The controller is held across provider calls, so a waiter may sit
    /// behind a slow generation. Give up after a while instead.
    pub async fn acquire_controller(
        &self,
        wait: Duration,
    ) -> Result<MutexGuard<'_, ThoughtController>, Box<dyn Error + Send + Sync>> {
        match timeout(wait, self.controller.lock()).await {
            Ok(guard) => Ok(guard),
            Err(_) => {
                log::error!("Timeout while acquiring controller lock");
                Err("Lock acquisition timeout".into())
            }
        }
    }

    /// Swaps in a new countdown ticker, aborting the old one.
    pub async fn replace_countdown(&self, task: Option<JoinHandle<()>>) {
        let mut current = self.countdown_task.lock().await;
        if let Some(old) = current.take() {
            old.abort();
        }
        *current = task;
    }
}
