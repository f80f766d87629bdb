pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::GuestApiClient;
pub use config::{ApiSettings, AppConfig, BaseUrlResolver};
pub use core::guest_validator::{validate_create, validate_update};
pub use core::health::{HealthReport, UptimeClock};
pub use core::roster_import::{ImportReport, RosterImport};
pub use domain::model::{GuestCategory, GuestPatch, GuestRecord, GuestStatus};
pub use domain::violation::{FieldViolation, ValidationError};
pub use utils::error::{GuestError, Result};
