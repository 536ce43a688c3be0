//! Configuration loading and management for the shift voucher engine.
//!
//! The roster epoch, the voucher rate and the persistence key have built-in
//! values and can be overridden from a `roster.yaml` file.
//!
//! # Example
//!
//! ```no_run
//! use shift_voucher::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Epoch: {:?}", config.epoch());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_SHIFT_RATE, DEFAULT_STORAGE_KEY, RosterConfig};
