//! Site generation settings management for `sitegen.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── env        # Environment variable lookup (SITE_URL override)
//! ├── types/     # Utility types
//! │   ├── error  # ConfigError, diagnostics, field paths
//! │   └── handle # Global config handle
//! ├── util       # Config file discovery
//! └── mod.rs     # SiteGenerationConfig (this file)
//! ```
//!
//! # Precedence
//!
//! | Source             | Wins over          |
//! |--------------------|--------------------|
//! | built-in defaults  | (base)             |
//! | `sitegen.toml`     | defaults           |
//! | `SITE_URL` env var | file and defaults  |
//!
//! # Example
//!
//! ```toml
//! site_url = "https://tableau-de-bord-de-suivi-gpta.vercel.app"
//! generate_robots_txt = true
//! generate_index_sitemap = false
//! ```

pub mod env;
pub mod types;
mod util;

pub use env::Env;
pub use types::{ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config};

use util::find_config_file;

use crate::{debug, log};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Site root used when neither `sitegen.toml` nor `SITE_URL` provides one.
pub const DEFAULT_SITE_URL: &str = "https://tableau-de-bord-de-suivi-gpta.vercel.app";

/// File name searched for by [`SiteGenerationConfig::load`].
pub const CONFIG_FILE: &str = "sitegen.toml";

/// Environment variable overriding the site root URL.
pub const SITE_URL_VAR: &str = "SITE_URL";

// ============================================================================
// root configuration
// ============================================================================

/// Settings read once per build by the site generator.
///
/// The generator uses `site_url` as the base for every absolute URL it
/// emits, and the two flags to decide which files to produce next to the
/// sitemap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteGenerationConfig {
    /// Absolute URL of the canonical site root (scheme + host).
    pub site_url: String,

    /// Emit `robots.txt` alongside the sitemap.
    pub generate_robots_txt: bool,

    /// Emit a sitemap index referencing per-section sitemaps instead of a
    /// single flat sitemap.
    pub generate_index_sitemap: bool,
}

impl Default for SiteGenerationConfig {
    fn default() -> Self {
        Self {
            site_url: DEFAULT_SITE_URL.into(),
            generate_robots_txt: true,
            generate_index_sitemap: false,
        }
    }
}

impl SiteGenerationConfig {
    /// Resolve settings from the environment alone.
    ///
    /// Defaults plus the `SITE_URL` override, applied verbatim when present
    /// and non-empty. No file lookup and no URL validation happen here; use
    /// [`SiteGenerationConfig::load`] for the full pipeline.
    pub fn from_env(env: &Env) -> Self {
        let mut config = Self::default();
        if let Some(url) = env.non_empty(SITE_URL_VAR) {
            config.site_url = url;
        }
        config
    }

    /// Load settings for a project rooted at `dir`.
    ///
    /// Sources, lowest to highest precedence: built-in defaults, a
    /// `sitegen.toml` found by upward search from `dir`, the `SITE_URL`
    /// environment variable. A missing file is a normal case.
    ///
    /// A malformed `site_url` in the file is an error; a malformed
    /// `SITE_URL` override is dropped with a warning and the prior value
    /// kept.
    pub fn load(dir: &Path, env: &Env) -> Result<Self> {
        let mut config = match find_config_file(dir, CONFIG_FILE) {
            Some(path) => Self::from_path(&path)?,
            None => {
                debug!("config"; "no {CONFIG_FILE} found, using defaults");
                Self::default()
            }
        };

        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        diag.into_result().map_err(ConfigError::Diagnostics)?;

        config.apply_env_override(env);
        Ok(config)
    }

    /// Parse settings from TOML content; missing fields take defaults.
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load settings from a file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        debug!("config"; "loaded {}", path.display());
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        // Show only the filename since the file is always at the site root
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Apply the `SITE_URL` override if present, non-empty, and well formed.
    fn apply_env_override(&mut self, env: &Env) {
        let Some(url) = env.non_empty(SITE_URL_VAR) else {
            return;
        };

        let mut diag = ConfigDiagnostics::new();
        check_site_url(&url, &mut diag);
        if diag.is_empty() {
            self.site_url = url;
        } else {
            log!(
                "warning";
                "{SITE_URL_VAR}=\"{url}\" is not a valid absolute URL, keeping \"{}\"",
                self.site_url
            );
        }
    }

    /// Validate the resolved settings.
    ///
    /// # Checks
    /// - `site_url` must parse as an absolute URL
    /// - scheme must be http or https
    /// - the URL must have a host
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        check_site_url(&self.site_url, diag);
    }
}

/// URL format check using the url crate for strict validation.
fn check_site_url(url_str: &str, diag: &mut ConfigDiagnostics) {
    const FIELD: FieldPath = FieldPath::new("site_url");

    match url::Url::parse(url_str) {
        Ok(parsed) => {
            // Must be http or https
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    FIELD,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.com",
                );
            }
            // Must have a valid host
            if parsed.host_str().is_none() {
                diag.error_with_hint(
                    FIELD,
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                FIELD,
                format!("invalid URL: {e}"),
                "use format like https://example.com",
            );
        }
    }
}

// ============================================================================
// tests
// ============================================================================
