
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Height of the fixed navigation bar, used as scroll offset.
pub const NAV_HEIGHT_PX: f64 = 80.0;

/// Stand-in delay for the native form when no lead endpoint is configured.
pub const SIMULATED_SUBMIT_MS: u32 = 1_500;

pub const SUBMIT_TIMEOUT_MS: u32 = 10_000;

pub const HUBSPOT_SCRIPT_SRC: &str = "//js.hsforms.net/forms/v2.js";
pub const HUBSPOT_CONTAINER_ID: &str = "hubspot-form-container";

/// How the get-involved form is rendered. Decided once at startup from
/// the build environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormStrategy {
    Embedded { portal_id: String, form_id: String },
    Native,
}

impl FormStrategy {
    /// A missing or blank portal id is the only thing that selects the
    /// native form.
    pub fn from_ids(portal_id: Option<&str>, form_id: Option<&str>) -> Self {
        match portal_id.map(str::trim).filter(|id| !id.is_empty()) {
            Some(portal_id) => FormStrategy::Embedded {
                portal_id: portal_id.to_string(),
                form_id: form_id.map(str::trim).unwrap_or_default().to_string(),
            },
            None => FormStrategy::Native,
        }
    }

    pub fn from_build_env() -> Self {
        Self::from_ids(option_env!("HUBSPOT_PORTAL_ID"), option_env!("HUBSPOT_FORM_ID"))
    }

    pub fn is_native(&self) -> bool {
        matches!(self, FormStrategy::Native)
    }
}

/// Where native form submissions go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LeadSink {
    Endpoint(String),
    Simulated { delay_ms: u32 },
}

impl LeadSink {
    pub fn from_path(path: Option<&str>) -> Self {
        match path.map(str::trim).filter(|p| !p.is_empty()) {
            Some(path) if path.starts_with("http") => LeadSink::Endpoint(path.to_string()),
            Some(path) => LeadSink::Endpoint(format!("{}{}", get_backend_url(), path)),
            None => LeadSink::Simulated { delay_ms: SIMULATED_SUBMIT_MS },
        }
    }

    pub fn from_build_env() -> Self {
        Self::from_path(option_env!("RAIOK_LEAD_ENDPOINT"))
    }
}

/// Static configuration resolved once in `main`.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub form: FormStrategy,
    pub lead_sink: LeadSink,
}

impl SiteConfig {
    pub fn from_build_env() -> Self {
        Self {
            form: FormStrategy::from_build_env(),
            lead_sink: LeadSink::from_build_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portal_id_selects_embedded() {
        let strategy = FormStrategy::from_ids(Some("242682784"), Some("abc-123"));
        assert_eq!(
            strategy,
            FormStrategy::Embedded {
                portal_id: "242682784".to_string(),
                form_id: "abc-123".to_string(),
            }
        );
        assert!(!strategy.is_native());
    }

    #[test]
    fn missing_or_blank_portal_id_selects_native() {
        assert!(FormStrategy::from_ids(None, Some("abc")).is_native());
        assert!(FormStrategy::from_ids(Some("   "), Some("abc")).is_native());
    }

    #[test]
    fn form_id_is_optional() {
        let strategy = FormStrategy::from_ids(Some("1"), None);
        assert_eq!(
            strategy,
            FormStrategy::Embedded { portal_id: "1".to_string(), form_id: String::new() }
        );
    }

    #[test]
    fn lead_sink_from_path() {
        assert_eq!(LeadSink::from_path(None), LeadSink::Simulated { delay_ms: SIMULATED_SUBMIT_MS });
        assert_eq!(
            LeadSink::from_path(Some("https://crm.example.org/leads")),
            LeadSink::Endpoint("https://crm.example.org/leads".to_string())
        );
        assert_eq!(
            LeadSink::from_path(Some("/api/leads")),
            LeadSink::Endpoint(format!("{}/api/leads", get_backend_url()))
        );
    }
}
