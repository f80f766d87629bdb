//! Constraint tables for guest payloads.
//!
//! Each payload shape is a list of [`FieldRule`]s. A rule says whether the
//! field must be present and which string checks it must pass. [`evaluate`]
//! runs every rule against a JSON object and collects all failures before
//! returning.

use crate::domain::model::{GuestCategory, GuestStatus};
use crate::domain::violation::{FieldViolation, ValidationError};
use crate::utils::validation::{is_blank, is_email};
use serde_json::Value;
use std::collections::HashMap;

pub type Predicate = fn(&str) -> bool;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
}

#[derive(Clone, Copy)]
pub struct Check {
    pub constraint: &'static str,
    pub test: Predicate,
    pub message: &'static str,
}

#[derive(Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub presence: Presence,
    pub checks: &'static [Check],
}

pub const REQUIRED: &str = "required";
pub const IS_STRING: &str = "is_string";
pub const IS_OBJECT: &str = "is_object";
pub const NOT_EMPTY: &str = "not_empty";
pub const IS_EMAIL: &str = "is_email";
pub const IS_ENUM: &str = "is_enum";

fn not_blank(value: &str) -> bool {
    !is_blank(value)
}

fn is_guest_category(value: &str) -> bool {
    value.parse::<GuestCategory>().is_ok()
}

fn is_guest_status(value: &str) -> bool {
    value.parse::<GuestStatus>().is_ok()
}

const NAME_CHECKS: &[Check] = &[Check {
    constraint: NOT_EMPTY,
    test: not_blank,
    message: "name should not be empty",
}];

const EMAIL_CHECKS: &[Check] = &[
    Check {
        constraint: NOT_EMPTY,
        test: not_blank,
        message: "email should not be empty",
    },
    Check {
        constraint: IS_EMAIL,
        test: is_email,
        message: "email must be an email",
    },
];

pub const CATEGORY_ENUM_MESSAGE: &str =
    "category must be one of the following values: VIP, INDUSTRY, COMP, STAFF, PRESS, SPONSOR";

const CATEGORY_ENUM_CHECKS: &[Check] = &[Check {
    constraint: IS_ENUM,
    test: is_guest_category,
    message: CATEGORY_ENUM_MESSAGE,
}];

const CATEGORY_TEXT_CHECKS: &[Check] = &[Check {
    constraint: NOT_EMPTY,
    test: not_blank,
    message: "category should not be empty",
}];

const STATUS_CHECKS: &[Check] = &[Check {
    constraint: IS_ENUM,
    test: is_guest_status,
    message: "status must be one of the following values: INVITED, CONFIRMED, DECLINED, CHECKED_IN",
}];

pub const CREATE_RULES: &[FieldRule] = &[
    FieldRule {
        field: "name",
        presence: Presence::Required,
        checks: NAME_CHECKS,
    },
    FieldRule {
        field: "email",
        presence: Presence::Required,
        checks: EMAIL_CHECKS,
    },
    FieldRule {
        field: "mobile",
        presence: Presence::Optional,
        checks: &[],
    },
    FieldRule {
        field: "category",
        presence: Presence::Required,
        checks: CATEGORY_ENUM_CHECKS,
    },
    FieldRule {
        field: "notes",
        presence: Presence::Optional,
        checks: &[],
    },
];

// category 在更新時只檢查非空，與建立時的列舉檢查不同
pub const UPDATE_RULES: &[FieldRule] = &[
    FieldRule {
        field: "name",
        presence: Presence::Optional,
        checks: NAME_CHECKS,
    },
    FieldRule {
        field: "email",
        presence: Presence::Optional,
        checks: EMAIL_CHECKS,
    },
    FieldRule {
        field: "mobile",
        presence: Presence::Optional,
        checks: &[],
    },
    FieldRule {
        field: "category",
        presence: Presence::Optional,
        checks: CATEGORY_TEXT_CHECKS,
    },
    FieldRule {
        field: "notes",
        presence: Presence::Optional,
        checks: &[],
    },
    FieldRule {
        field: "status",
        presence: Presence::Optional,
        checks: STATUS_CHECKS,
    },
];

/// String fields that passed every check, keyed by field name.
#[derive(Debug, Default)]
pub struct CheckedFields<'a> {
    values: HashMap<&'static str, &'a str>,
}

impl<'a> CheckedFields<'a> {
    pub fn get(&self, field: &str) -> Option<&'a str> {
        self.values.get(field).copied()
    }

    pub fn owned(&self, field: &str) -> Option<String> {
        self.get(field).map(str::to_string)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Runs `rules` against `input`. Keys not named by a rule are ignored and
/// `null` counts as absent.
pub fn evaluate<'a>(
    rules: &[FieldRule],
    input: &'a Value,
) -> Result<CheckedFields<'a>, ValidationError> {
    let object = match input.as_object() {
        Some(object) => object,
        None => {
            return Err(ValidationError::new(vec![FieldViolation::new(
                "payload",
                IS_OBJECT,
                "payload must be a JSON object",
            )]))
        }
    };

    let mut checked = CheckedFields::default();
    let mut violations = Vec::new();

    for rule in rules {
        let value = match object.get(rule.field) {
            None | Some(Value::Null) => {
                if rule.presence == Presence::Required {
                    violations.push(FieldViolation::new(
                        rule.field,
                        REQUIRED,
                        format!("{} is required", rule.field),
                    ));
                }
                continue;
            }
            Some(Value::String(s)) => s.as_str(),
            Some(_) => {
                violations.push(FieldViolation::new(
                    rule.field,
                    IS_STRING,
                    format!("{} must be a string", rule.field),
                ));
                continue;
            }
        };

        let before = violations.len();
        for check in rule.checks {
            if !(check.test)(value) {
                violations.push(FieldViolation::new(
                    rule.field,
                    check.constraint,
                    check.message,
                ));
            }
        }

        if violations.len() == before {
            checked.values.insert(rule.field, value);
        }
    }

    if violations.is_empty() {
        Ok(checked)
    } else {
        Err(ValidationError::new(violations))
    }
}
