use rand::Rng;
use std::time::Duration;

use ghostwriter_core::config::EnhancerConfig;

/// Simulated processing time for the generation step: `base + U[0, jitter)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyModel {
    base: Duration,
    jitter: Duration,
}

impl Default for LatencyModel {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000), Duration::from_millis(1500))
    }
}

impl LatencyModel {
    pub fn new(base: Duration, jitter: Duration) -> Self {
        Self { base, jitter }
    }

    /// No simulated delay at all
    pub fn none() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    pub fn from_config(config: &EnhancerConfig) -> Self {
        Self::new(config.latency_base(), config.latency_jitter())
    }

    pub fn is_zero(&self) -> bool {
        self.base.is_zero() && self.jitter.is_zero()
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let jitter_ms = self.jitter.as_millis() as u64;
        if jitter_ms == 0 {
            return self.base;
        }
        self.base + Duration::from_millis(rng.gen_range(0..jitter_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_samples_stay_in_window() {
        let model = LatencyModel::default();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let d = model.sample(&mut rng);
            assert!(d >= Duration::from_millis(1000));
            assert!(d < Duration::from_millis(2500));
        }
    }

    #[test]
    fn test_none_is_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(LatencyModel::none().is_zero());
        assert_eq!(LatencyModel::none().sample(&mut rng), Duration::ZERO);
    }
}
