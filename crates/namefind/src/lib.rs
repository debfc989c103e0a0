//! # namefind
//!
//! Front end for the namefind core engine:
//! - **config**: clap CLI with environment fallbacks
//! - **loader**: CSV roster ingestion into a `Registry`
//! - **session**: interactive loop, history and language switching
//! - **render** / **export**: text, JSON and CSV output
//! - **logging**: tracing subscriber setup
//!
//! ## Usage
//!
//! ```rust,ignore
//! use namefind::{loader, session::Session, locale::Locale};
//! use namefind_core::SearchOptions;
//!
//! let registry = loader::load_registry("roster.csv".as_ref())?;
//! let mut session = Session::new(registry, SearchOptions::default(), Locale::English);
//! session.run(std::io::stdin().lock(), std::io::stdout())?;
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod history;
pub mod loader;
pub mod locale;
pub mod logging;
pub mod render;
pub mod session;

pub use error::{Error, Result};
