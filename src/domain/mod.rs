//! Domain layer: the configuration snapshot, the localized string table and the
//! pure eligibility and presentation rules, plus the ports through which the host
//! platform supplies basket, country, configuration and localization data.

pub mod basket;
pub mod config;
pub mod context;
pub mod eligibility;
pub mod language;
pub mod ports;
pub mod presentation;
