//! Frigo Core - Configuration and logging shared by the Frigo crates
//!
//! # Modules
//!
//! - [`config`]: Strongly-typed configuration with file and environment variable support
//! - [`logging`]: Structured logging with tracing
//!
//! # Configuration
//!
//! ```rust,ignore
//! use frigo_core::Config;
//!
//! let config = Config::load()?;
//! ```
//!
//! Environment variables use the `FRIGO__` prefix with double underscore separators.
//! The conventional `GEMINI_API_KEY` and `GEMINI_MODEL` variables are honored as well:
//!
//! ```bash
//! FRIGO__LLM__TEMPERATURE=0.4
//! FRIGO__LOGGING__FORMAT=pretty
//! GEMINI_API_KEY=...
//! ```

pub mod config;
pub mod logging;

pub use config::Config;
pub use logging::init_tracing;
