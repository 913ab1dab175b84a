//! Global config handle.
//!
//! Uses `arc-swap` for lock-free reads. The configuration is resolved once
//! per build invocation, published here, and never mutated or reloaded
//! afterwards.

use crate::config::SiteGenerationConfig;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

/// Global config storage.
static CONFIG: LazyLock<ArcSwap<SiteGenerationConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteGenerationConfig::default()));

/// Current configuration value.
#[inline]
pub fn cfg() -> Arc<SiteGenerationConfig> {
    CONFIG.load_full()
}

/// Publish the resolved configuration.
#[inline]
pub fn init_config(config: SiteGenerationConfig) -> Arc<SiteGenerationConfig> {
    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_config_publishes_value() {
        let config = SiteGenerationConfig {
            site_url: "https://example.com".into(),
            ..Default::default()
        };
        let published = init_config(config.clone());

        assert_eq!(*published, config);
        assert_eq!(*cfg(), config);
    }
}
