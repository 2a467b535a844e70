use async_trait::async_trait;
use log::debug;
use std::time::Duration;

use ghostwriter_core::error::GenerationError;
use ghostwriter_core::types::EnhanceContext;

use crate::emotions::detect_emotions;
use crate::tables::descriptor_for;
use crate::templates::ReflectionTemplate;

/// Everything one generation step needs.
///
/// Random choices (template, delay) are drawn by the enhancer before the
/// request is built, so a generator is deterministic for a given request.
#[derive(Debug, Clone)]
pub struct GenerationRequest<'a> {
    pub raw_text: &'a str,
    pub mood: i64,
    pub context: &'a EnhanceContext,
    pub template: ReflectionTemplate,
    pub delay: Duration,
}

/// The replaceable generation step behind the enhancer
#[async_trait]
pub trait ReflectionGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest<'_>) -> Result<String, GenerationError>;
}

/// Local template-based generator with simulated latency
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateGenerator;

impl TemplateGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Compose the reflection text without waiting
    pub fn compose(request: &GenerationRequest<'_>) -> Result<String, GenerationError> {
        let descriptor = descriptor_for(request.mood);
        let emotions = detect_emotions(request.raw_text);
        let text = request.template.render(request.raw_text, descriptor, &emotions);

        if text.trim().is_empty() {
            return Err(GenerationError::Composition(format!(
                "{:?} produced no text",
                request.template
            )));
        }
        Ok(text)
    }
}

#[async_trait]
impl ReflectionGenerator for TemplateGenerator {
    async fn generate(&self, request: &GenerationRequest<'_>) -> Result<String, GenerationError> {
        if !request.delay.is_zero() {
            debug!("Simulating generation latency of {:?}", request.delay);
            tokio::time::sleep(request.delay).await;
        }
        Self::compose(request)
    }
}
