//! The reflection enhancer: memoized, latency-simulating template rewriting
//! of short journal notes.

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use ghostwriter_core::config::EnhancerConfig;
use ghostwriter_core::types::EnhanceContext;

use crate::cache::{CacheKey, CacheStats, ReflectionCache};
use crate::generator::{GenerationRequest, ReflectionGenerator, TemplateGenerator};
use crate::latency::LatencyModel;
use crate::templates::{fallback_reflection, ReflectionTemplate};

/// Where a reflection came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReflectionSource {
    /// Freshly composed by the generator
    Generated,
    /// Returned from the session memo
    Cached,
    /// Deterministic substitute after a generation failure
    Fallback,
}

/// An enhancer result and its provenance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reflection {
    pub text: String,
    pub source: ReflectionSource,
}

impl Reflection {
    pub fn is_fallback(&self) -> bool {
        self.source == ReflectionSource::Fallback
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

pub struct ReflectionEnhancer {
    enabled: bool,
    cache: ReflectionCache,
    latency: LatencyModel,
    rng: StdRng,
    generator: Box<dyn ReflectionGenerator>,
}

impl Default for ReflectionEnhancer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReflectionEnhancer {
    /// Enabled enhancer with the default latency and an entropy-seeded RNG
    pub fn new() -> Self {
        Self {
            enabled: true,
            cache: ReflectionCache::new(),
            latency: LatencyModel::default(),
            rng: StdRng::from_entropy(),
            generator: Box::new(TemplateGenerator::new()),
        }
    }

    pub fn from_config(config: &EnhancerConfig) -> Self {
        let enhancer = Self::new()
            .with_latency(LatencyModel::from_config(config))
            .with_enabled(config.enabled);
        match config.seed {
            Some(seed) => enhancer.with_seed(seed),
            None => enhancer,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_latency(mut self, latency: LatencyModel) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_generator(mut self, generator: Box<dyn ReflectionGenerator>) -> Self {
        self.generator = generator;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            info!("Reflection enhancer {}", if enabled { "enabled" } else { "disabled" });
        }
        self.enabled = enabled;
    }

    /// Flip the enabled flag, returning the new state
    pub fn toggle(&mut self) -> bool {
        self.set_enabled(!self.enabled);
        self.enabled
    }

    pub fn latency(&self) -> LatencyModel {
        self.latency
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn is_cached(&self, raw_text: &str, mood: i64) -> bool {
        self.cache.contains(&CacheKey::new(mood, raw_text))
    }

    /// Rewrite a note as a reflection.
    ///
    /// Returns `None` when disabled. Otherwise always produces text: a
    /// memoized or freshly generated reflection, or the mood's fallback if
    /// generation fails.
    pub async fn enhance(
        &mut self,
        raw_text: &str,
        mood: i64,
        context: &EnhanceContext,
    ) -> Option<String> {
        self.enhance_reflection(raw_text, mood, context)
            .await
            .map(Reflection::into_text)
    }

    /// Same as [`enhance`](Self::enhance) but reports the result's source
    pub async fn enhance_reflection(
        &mut self,
        raw_text: &str,
        mood: i64,
        context: &EnhanceContext,
    ) -> Option<Reflection> {
        if !self.enabled {
            debug!("Enhancer disabled; skipping reflection");
            return None;
        }

        let key = CacheKey::new(mood, raw_text);
        if let Some(text) = self.cache.get(&key) {
            debug!("Reflection cache hit for mood {}", mood);
            return Some(Reflection {
                text: text.clone(),
                source: ReflectionSource::Cached,
            });
        }

        let delay = self.latency.sample(&mut self.rng);
        let template =
            ReflectionTemplate::from_index(self.rng.gen_range(0..ReflectionTemplate::ALL.len()));
        let request = GenerationRequest {
            raw_text,
            mood,
            context,
            template,
            delay,
        };
        debug!(
            "Generating reflection: mood {}, {} chars, {:?}",
            mood,
            raw_text.chars().count(),
            template
        );

        match self.generator.generate(&request).await {
            Ok(text) => {
                self.cache.insert(key, text.clone());
                Some(Reflection {
                    text,
                    source: ReflectionSource::Generated,
                })
            }
            Err(err) => {
                warn!("Reflection generation failed, using fallback: {}", err);
                self.cache.record_fallback();
                Some(Reflection {
                    text: fallback_reflection(raw_text, mood),
                    source: ReflectionSource::Fallback,
                })
            }
        }
    }
}
