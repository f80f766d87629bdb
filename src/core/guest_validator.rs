use crate::core::rules::{
    evaluate, CATEGORY_ENUM_MESSAGE, CREATE_RULES, IS_ENUM, REQUIRED, UPDATE_RULES,
};
use crate::domain::model::{GuestCategory, GuestPatch, GuestRecord, GuestStatus};
use crate::domain::violation::{FieldViolation, ValidationError};
use serde_json::Value;

/// Validates a creation payload and builds the new record with status `INVITED`.
///
/// All violations are reported together. Any `status` in the payload is ignored.
pub fn validate_create(input: &Value) -> Result<GuestRecord, ValidationError> {
    let checked = evaluate(CREATE_RULES, input).inspect_err(|e| {
        tracing::debug!("Create payload rejected with {} violation(s)", e.violations().len());
    })?;

    // 規則表已保證三個必填欄位存在且合法
    let required = |field: &'static str| {
        checked.owned(field).ok_or_else(|| {
            ValidationError::new(vec![FieldViolation::new(
                field,
                REQUIRED,
                format!("{} is required", field),
            )])
        })
    };
    let name = required("name")?;
    let email = required("email")?;
    let category = required("category")?.parse::<GuestCategory>().map_err(|_| {
        ValidationError::new(vec![FieldViolation::new("category", IS_ENUM, CATEGORY_ENUM_MESSAGE)])
    })?;

    Ok(GuestRecord {
        name,
        email,
        mobile: checked.owned("mobile"),
        category,
        notes: checked.owned("notes"),
        status: GuestStatus::default(),
    })
}

/// Validates an update payload and projects it onto a sparse patch.
///
/// `category` is accepted as any non-empty text here. `status` must be one
/// of the four lifecycle values but any value may follow any other.
pub fn validate_update(input: &Value) -> Result<GuestPatch, ValidationError> {
    let checked = evaluate(UPDATE_RULES, input).inspect_err(|e| {
        tracing::debug!("Update payload rejected with {} violation(s)", e.violations().len());
    })?;

    let patch = GuestPatch {
        name: checked.owned("name"),
        email: checked.owned("email"),
        mobile: checked.owned("mobile"),
        category: checked.owned("category"),
        notes: checked.owned("notes"),
        status: checked.get("status").and_then(|s| s.parse().ok()),
    };

    if patch.is_empty() {
        tracing::debug!("Update payload is a no-op");
    }

    Ok(patch)
}
