use serde::{Deserialize, Serialize};

use super::validation::{EmailAddress, NiceClass};

pub const DEFAULT_COUNTRY: &str = "South Africa";

/// One turn of the triage conversation as submitted by the client.
///
/// `role` is kept verbatim so unknown roles can be normalized by the triage
/// service rather than rejected at the edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

impl ChatRole {
    /// Maps a wire role onto the supported set; anything unknown becomes `User`.
    pub fn normalize(raw: &str) -> Self {
        match raw {
            "system" => Self::System,
            "assistant" => Self::Assistant,
            _ => Self::User,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantDetails {
    pub full_name: String,
    pub address_line_1: String,
    #[serde(default)]
    pub address_line_2: Option<String>,
    pub city: String,
    pub province: String,
    pub postal_code: String,
    #[serde(default = "default_country")]
    pub country: String,
    pub email: EmailAddress,
    pub phone_number: String,
}

impl ApplicantDetails {
    /// Address lines in print order, skipping blanks.
    pub fn address_lines(&self) -> Vec<String> {
        let mut lines = vec![self.address_line_1.clone()];
        if let Some(line) = self
            .address_line_2
            .as_ref()
            .filter(|line| !line.trim().is_empty())
        {
            lines.push(line.clone());
        }
        lines.push(format!("{}, {}", self.city, self.province));
        lines.push(format!("{} {}", self.postal_code, self.country));
        lines
    }
}

fn default_country() -> String {
    DEFAULT_COUNTRY.to_string()
}

/// Mark and applicant data feeding document generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrademarkIntake {
    pub mark_text: String,
    pub nice_classes: Vec<NiceClass>,
    pub applicant: ApplicantDetails,
    #[serde(default)]
    pub slogan: Option<String>,
}
