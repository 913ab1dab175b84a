//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration errors, diagnostics, field paths |
//! | `handle` | Global configuration handle (thread-safe)    |

mod error;
pub mod handle;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use handle::{cfg, init_config};
