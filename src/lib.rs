//! Sitemap and robots generation settings for the GPTA tracking dashboard.
//!
//! The dashboard's site generator reads a single [`SiteGenerationConfig`]
//! value at build time and uses it to emit `sitemap.xml`, optionally
//! `robots.txt`, and optionally a sitemap index. This crate owns that value:
//! defaults, the optional `sitegen.toml` file, the `SITE_URL` environment
//! override, and validation of the resulting site root URL.
//!
//! ```ignore
//! let config = SiteGenerationConfig::load(&project_root, &Env::real())?;
//! let config = init_config(config);
//! // generator reads config.site_url, config.generate_robots_txt, ...
//! ```

pub mod config;
pub mod logger;

pub use config::{
    CONFIG_FILE, ConfigDiagnostics, ConfigError, DEFAULT_SITE_URL, Env, SITE_URL_VAR,
    SiteGenerationConfig, cfg, init_config,
};
