//! # CLI Module
//!
//! User-facing command layer for playsync. Each command wires the
//! resolution core (classifier, gateways, enricher) to terminal output:
//! spinners while network calls run, colored status lines, and either a
//! table or JSON dump of the result.
//!
//! ## Commands
//!
//! - [`import`] - Resolves a URL and persists a download ledger for it
//! - [`resolve`] - Resolves a URL and prints the track list (table or JSON)
//! - [`search`] - Runs a one-off YouTube music search for a free-text query
//!
//! Commands never return errors; failures are reported through the crate's
//! status macros, with `error!` terminating the process.

mod import;
mod resolve;
mod search;

pub use import::import;
pub use resolve::resolve;
pub use search::search;
