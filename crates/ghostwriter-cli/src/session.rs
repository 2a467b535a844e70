use chrono::{Local, NaiveDate, Timelike};
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use ghostwriter_core::config::GhostwriterConfig;
use ghostwriter_engine::ReflectionEnhancer;
use ghostwriter_storage::{FileJournalStore, JournalRepository};

/// Everything a command needs: configuration, the journal and one enhancer
/// shared by all enhancement calls in this process.
pub struct Session {
    pub config: GhostwriterConfig,
    pub store: Box<dyn JournalRepository>,
    pub enhancer: ReflectionEnhancer,
    today: NaiveDate,
    hour: u32,
}

impl Session {
    pub fn from_config(config: GhostwriterConfig) -> Self {
        let now = Local::now();
        let store = FileJournalStore::from_config(&config.storage);
        debug!("Journal file: {}", store.path().display());
        Self {
            store: Box::new(store),
            enhancer: ReflectionEnhancer::from_config(&config.enhancer),
            config,
            today: now.date_naive(),
            hour: now.hour(),
        }
    }

    pub fn with_store(mut self, store: Box<dyn JournalRepository>) -> Self {
        self.store = store;
        self
    }

    pub fn with_enhancer(mut self, enhancer: ReflectionEnhancer) -> Self {
        self.enhancer = enhancer;
        self
    }

    /// Pin the clock, for deterministic dates
    pub fn with_today(mut self, today: NaiveDate, hour: u32) -> Self {
        self.today = today;
        self.hour = hour;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// RNG for sample data, seeded like the enhancer
    pub fn rng(&self) -> StdRng {
        match self.config.enhancer.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
