//! Configuration types for the roster.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from `roster.yaml`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::EpochAssignment;

/// The voucher amount per duty day in force: R$ 90,00.
pub const DEFAULT_SHIFT_RATE: Decimal = Decimal::from_parts(90, 0, 0, false, 0);

/// The key under which session state is persisted.
pub const DEFAULT_STORAGE_KEY: &str = "gcm_vale_data_v4";

/// Roster and payroll configuration.
///
/// Every field is optional in YAML; missing fields take the built-in values.
///
/// # Example
///
/// ```
/// use shift_voucher::config::RosterConfig;
/// use shift_voucher::models::Crew;
/// use rust_decimal::Decimal;
///
/// let config = RosterConfig::default();
/// assert_eq!(config.epoch.crew, Crew::B);
/// assert_eq!(config.shift_rate, Decimal::from(90));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// The parity anchor of the roster.
    pub epoch: EpochAssignment,
    /// The voucher amount per duty day.
    pub shift_rate: Decimal,
    /// The key under which session state is persisted.
    pub storage_key: String,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            epoch: EpochAssignment::standard(),
            shift_rate: DEFAULT_SHIFT_RATE,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}
