// crates/ghostwriter-engine/src/lib.rs
pub mod cache;
pub mod emotions;
pub mod enhancer;
pub mod generator;
pub mod latency;
pub mod tables;
pub mod templates;

pub use cache::CacheStats;
pub use enhancer::{Reflection, ReflectionEnhancer, ReflectionSource};
pub use generator::{GenerationRequest, ReflectionGenerator, TemplateGenerator};
pub use latency::LatencyModel;
