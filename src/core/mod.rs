pub mod guest_validator;
pub mod health;
pub mod roster_import;
pub mod rules;

pub use crate::domain::model::{GuestCategory, GuestPatch, GuestRecord, GuestStatus};
pub use crate::domain::ports::{ConfigProvider, GuestGateway};
pub use crate::domain::violation::{FieldViolation, ValidationError};
pub use crate::utils::error::Result;
