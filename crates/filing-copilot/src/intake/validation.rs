use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$")
        .expect("email pattern compiles")
});

/// Shape violations detected while deserializing intake payloads.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),
    #[error("NICE class must be between 1 and 45, found {found}")]
    ClassOutOfRange { found: i64 },
}

/// Syntactically well-formed e-mail address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(raw: &str) -> Result<Self, IntakeError> {
        let trimmed = raw.trim();
        if trimmed.len() > 254 || !EMAIL_PATTERN.is_match(trimmed) {
            return Err(IntakeError::InvalidEmail(raw.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = IntakeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// NICE classification number (1 through 45).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct NiceClass(u8);

impl NiceClass {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 45;

    pub fn new(number: u8) -> Result<Self, IntakeError> {
        Self::try_from(i64::from(number))
    }

    pub fn number(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for NiceClass {
    type Error = IntakeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(IntakeError::ClassOutOfRange { found: value });
        }
        Ok(Self(value as u8))
    }
}

impl From<NiceClass> for u8 {
    fn from(value: NiceClass) -> Self {
        value.0
    }
}

impl fmt::Display for NiceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        for raw in ["thandi@example.co.za", "filings+tm@firm.example.com", " a.b@c.io "] {
            let email = EmailAddress::parse(raw).expect("address accepted");
            assert_eq!(email.as_str(), raw.trim());
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for raw in ["", "plainaddress", "@example.com", "user@", "user@localhost", "a b@c.com"] {
            assert_eq!(
                EmailAddress::parse(raw),
                Err(IntakeError::InvalidEmail(raw.to_string())),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn email_deserialization_reports_the_value() {
        let err = serde_json::from_str::<EmailAddress>("\"nope\"").expect_err("rejected");
        assert!(err.to_string().contains("invalid email address 'nope'"));
    }

    #[test]
    fn nice_class_bounds() {
        assert_eq!(NiceClass::new(1).map(NiceClass::number), Ok(1));
        assert_eq!(NiceClass::new(45).map(NiceClass::number), Ok(45));
        assert_eq!(
            NiceClass::new(0),
            Err(IntakeError::ClassOutOfRange { found: 0 })
        );
        assert!(serde_json::from_str::<NiceClass>("46").is_err());
        assert!(serde_json::from_str::<NiceClass>("-3").is_err());
        assert_eq!(
            serde_json::to_string(&NiceClass::new(30).expect("valid")).expect("serializes"),
            "30"
        );
    }
}
