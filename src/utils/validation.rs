use crate::utils::error::{GuestError, Result};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

const EMAIL_MAX_LEN: usize = 254;
const LOCAL_PART_MAX_LEN: usize = 64;

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    // local 部分以點分隔且每段不可為空；網域最後一段為至少兩個字母的 TLD
    EMAIL.get_or_init(|| {
        Regex::new(
            r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+(?:[A-Za-z]{2,63}|xn--[A-Za-z0-9-]{1,59})$",
        )
        .expect("email pattern compiles")
    })
}

pub fn is_email(value: &str) -> bool {
    match value.rsplit_once('@') {
        Some((local, _)) => {
            value.len() <= EMAIL_MAX_LEN
                && local.len() <= LOCAL_PART_MAX_LEN
                && email_pattern().is_match(value)
        }
        None => false,
    }
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(GuestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(GuestError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(GuestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(GuestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(GuestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if is_blank(value) {
        return Err(GuestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(GuestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_email() {
        assert!(is_email("a@b.com"));
        assert!(is_email("jane.doe+vip@mail.example.org"));
        assert!(!is_email("not-an-email"));
        assert!(!is_email("bad"));
        assert!(!is_email("a@b"));
        assert!(!is_email("a b@c.com"));
        assert!(!is_email("@b.com"));
        assert!(!is_email("a@-b.com"));
    }

    #[test]
    fn test_is_email_rejects_misplaced_dots() {
        assert!(is_email("jane.doe@x.com"));
        assert!(!is_email(".jane@x.com"));
        assert!(!is_email("jane.@x.com"));
        assert!(!is_email("jane..doe@x.com"));
        assert!(!is_email("jane@x..com"));
        assert!(!is_email("jane@.x.com"));
    }

    #[test]
    fn test_is_email_top_level_domain() {
        assert!(is_email("a@b.co"));
        assert!(is_email("guest@example.xn--p1ai"));
        assert!(!is_email("a@b.c"));
        assert!(!is_email("a@10.0"));
        assert!(!is_email("a@192.168.0.1"));
        assert!(!is_email("a@b.c0m"));
    }

    #[test]
    fn test_is_email_length_limits() {
        let local = "a".repeat(64);
        assert!(is_email(&format!("{}@x.com", local)));
        assert!(!is_email(&format!("{}a@x.com", local)));

        let label = "d".repeat(63);
        let long_domain = format!("{0}.{0}.{0}.{0}.com", label);
        assert!(!is_email(&format!("a@{}", long_domain)));
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api.base_url", "https://example.com").is_ok());
        assert!(validate_url("api.base_url", "http://localhost:3001").is_ok());
        assert!(validate_url("api.base_url", "").is_err());
        assert!(validate_url("api.base_url", "invalid-url").is_err());
        assert!(validate_url("api.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "Jane").is_ok());
        assert!(validate_non_empty_string("name", "   ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("api.timeout_seconds", 10, 1, 300).is_ok());
        assert!(validate_range("api.timeout_seconds", 0, 1, 300).is_err());
        assert!(validate_range("api.timeout_seconds", 301, 1, 300).is_err());
    }
}
