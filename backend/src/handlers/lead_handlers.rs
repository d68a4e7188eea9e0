use std::collections::BTreeMap;

use axum::{http::StatusCode, Json};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Body posted by the site's native get-involved form.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadRequest {
    pub first_name: String,
    pub email: String,
    pub organization: String,
    pub interest: String,
}

/// A single rejected field. Messages match what the form shows inline.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LeadError {
    #[error("First name is required")]
    FirstNameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

impl LeadError {
    pub fn field(&self) -> &'static str {
        match self {
            LeadError::FirstNameRequired => "firstName",
            LeadError::EmailRequired | LeadError::InvalidEmail => "email",
        }
    }
}

pub fn validate_lead(lead: &LeadRequest) -> Vec<LeadError> {
    let mut errors = Vec::new();
    if lead.first_name.trim().is_empty() {
        errors.push(LeadError::FirstNameRequired);
    }
    let email = lead.email.trim();
    if email.is_empty() {
        errors.push(LeadError::EmailRequired);
    } else if !EMAIL_PATTERN.is_match(email) {
        errors.push(LeadError::InvalidEmail);
    }
    errors
}

/// Only the domain part is logged.
fn email_domain(email: &str) -> &str {
    email.trim().rsplit_once('@').map(|(_, domain)| domain).unwrap_or("unknown")
}

pub async fn create_lead(
    Json(lead): Json<LeadRequest>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let errors = validate_lead(&lead);
    if !errors.is_empty() {
        let fields: BTreeMap<&str, String> = errors
            .iter()
            .map(|error| (error.field(), error.to_string()))
            .collect();
        warn!("Rejected lead with invalid fields: {:?}", fields.keys().collect::<Vec<_>>());
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"error": "Invalid lead", "fields": fields})),
        ));
    }

    let id = Uuid::new_v4();
    info!(
        lead_id = %id,
        email_domain = email_domain(&lead.email),
        interest = lead.interest.as_str(),
        has_organization = !lead.organization.trim().is_empty(),
        "Lead received"
    );

    Ok((StatusCode::ACCEPTED, Json(json!({"id": id.to_string()}))))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(first_name: &str, email: &str) -> LeadRequest {
        LeadRequest {
            first_name: first_name.to_string(),
            email: email.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn rejects_missing_name_and_bad_email() {
        assert_eq!(
            validate_lead(&lead("", "not-an-email")),
            vec![LeadError::FirstNameRequired, LeadError::InvalidEmail]
        );
        assert_eq!(validate_lead(&lead("Ada", "  ")), vec![LeadError::EmailRequired]);
    }

    #[test]
    fn accepts_valid_lead() {
        assert!(validate_lead(&lead("Ada", "ada@example.org")).is_empty());
    }

    #[test]
    fn errors_name_their_field() {
        assert_eq!(LeadError::InvalidEmail.field(), "email");
        assert_eq!(LeadError::InvalidEmail.to_string(), "Please enter a valid email address");
        assert_eq!(LeadError::FirstNameRequired.field(), "firstName");
    }

    #[test]
    fn logs_domain_only() {
        assert_eq!(email_domain("ada@example.org"), "example.org");
        assert_eq!(email_domain("nobody"), "unknown");
    }
}
