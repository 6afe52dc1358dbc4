//! Style loader for environment variables and files.
//!
//! Responsibilities:
//! - Load alert styling from `.env` files, environment variables, and a JSON style file.
//! - Provide a builder-pattern `StyleLoader` for layered style merging.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Per-alert text and buttons (see `types::AlertConfiguration`).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over style file values.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;
mod overrides;
mod path;

pub use builder::StyleLoader;
pub use error::ConfigError;
pub use overrides::StyleOverrides;
pub use path::default_style_path;
