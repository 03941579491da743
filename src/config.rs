//! Engine and agent configuration.

use std::time::Duration;

/// Tuning for the engine's timers and randomized behavior.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Physics simulation period (~20 Hz).
    pub physics_tick: Duration,

    /// Enrichment sampling period.
    pub enrichment_tick: Duration,

    /// Probability that enrichment proposes any given node pair.
    pub enrichment_density: f64,

    /// Simulated typing delay before an agent reply is applied.
    pub typing_delay: Duration,

    /// How many recent messages travel with each agent request.
    pub context_window: usize,

    /// The primary topic the graph is seeded with.
    pub seed_topic: String,

    /// Initial size of the seeded topic node.
    pub seed_size: f64,

    /// Fixed seed for the engine's random source. `None` seeds from entropy;
    /// tests set it for reproducible layouts and link draws.
    pub rng_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            physics_tick: Duration::from_millis(50),
            enrichment_tick: Duration::from_secs(5),
            enrichment_density: 0.3,
            typing_delay: Duration::from_millis(1500),
            context_window: 10,
            seed_topic: "Optimization".to_string(),
            seed_size: 40.0,
            rng_seed: None,
        }
    }
}

/// Connection settings for the remote agent endpoint.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Base URL of the chat-completion server (no trailing slash).
    pub base_url: String,

    /// Model name passed through to the endpoint.
    pub model: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            base_url: "http://localhost:8000".to_string(),
            model: "claude-sonnet-4.5".to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.physics_tick, Duration::from_millis(50));
        assert_eq!(config.enrichment_tick, Duration::from_secs(5));
        assert_eq!(config.enrichment_density, 0.3);
        assert_eq!(config.seed_topic, "Optimization");
        assert!(config.rng_seed.is_none());
    }
}
