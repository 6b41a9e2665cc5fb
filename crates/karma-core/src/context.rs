//! Everything a karma operation needs, bundled once at startup and passed by
//! reference into every component.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::KarmaConfig;
use crate::traits::{
    Clock, DecayDistributor, EvenSplit, IScoreStore, IUserDirectory, LinearSpread,
    LowercaseTrim, ModifierDistributor, PassthroughDirectory, SystemClock, TermNormalizer,
};

pub struct KarmaContext {
    pub config: KarmaConfig,
    pub store: Arc<dyn IScoreStore>,
    pub users: Arc<dyn IUserDirectory>,
    pub clock: Arc<dyn Clock>,
    pub normalizer: Arc<dyn TermNormalizer>,
    pub modifier_distributor: Arc<dyn ModifierDistributor>,
    pub decay_distributor: Arc<dyn DecayDistributor>,
}

impl KarmaContext {
    /// Build a context with the default strategies: wall clock, passthrough
    /// user names, lowercase/trim normalization, even modifier split, and
    /// linear backfill spread over the configured decay interval.
    pub fn new(config: KarmaConfig, store: Arc<dyn IScoreStore>) -> Self {
        let decay_distributor = Arc::new(LinearSpread::new(config.decay.interval()));
        Self {
            config,
            store,
            users: Arc::new(PassthroughDirectory),
            clock: Arc::new(SystemClock),
            normalizer: Arc::new(LowercaseTrim),
            modifier_distributor: Arc::new(EvenSplit),
            decay_distributor,
        }
    }

    pub fn with_users(mut self, users: Arc<dyn IUserDirectory>) -> Self {
        self.users = users;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_normalizer(mut self, normalizer: Arc<dyn TermNormalizer>) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn with_modifier_distributor(mut self, distributor: Arc<dyn ModifierDistributor>) -> Self {
        self.modifier_distributor = distributor;
        self
    }

    pub fn with_decay_distributor(mut self, distributor: Arc<dyn DecayDistributor>) -> Self {
        self.decay_distributor = distributor;
        self
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn normalize(&self, raw: &str) -> String {
        self.normalizer.normalize(raw)
    }

    pub fn decay_enabled(&self) -> bool {
        self.config.decay.enabled
    }
}
