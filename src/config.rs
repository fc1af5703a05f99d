// Runtime configuration from environment variables.
// Everything is optional: a missing token lowers rate limits, missing
// email credentials degrade to an inline "not configured" status.

#![allow(dead_code)]

use std::env;

/// Credentials for the EmailJS transactional send endpoint.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub cv_template_id: Option<String>,
    pub public_key: String,
    pub cv_password: Option<String>,
}

/// All environment-driven configuration, read once at startup.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub github_token: Option<String>,
    pub email: Option<EmailConfig>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            github_token: non_empty(env::var("GITHUB_TOKEN").ok()),
            email: EmailConfig::from_env(),
        }
    }
}

impl EmailConfig {
    /// Present only when the three mandatory EmailJS variables are set.
    fn from_env() -> Option<Self> {
        let service_id = non_empty(env::var("EMAILJS_SERVICE_ID").ok())?;
        let template_id = non_empty(env::var("EMAILJS_TEMPLATE_ID").ok())?;
        let public_key = non_empty(env::var("EMAILJS_PUBLIC_KEY").ok())?;
        Some(Self {
            service_id,
            template_id,
            cv_template_id: non_empty(env::var("EMAILJS_CV_TEMPLATE_ID").ok()),
            public_key,
            cv_password: non_empty(env::var("CV_PASSWORD").ok()),
        })
    }

    /// The CV password flow needs its own template and the password.
    pub fn cv_credentials(&self) -> Option<(&str, &str)> {
        match (&self.cv_template_id, &self.cv_password) {
            (Some(template), Some(password)) => Some((template.as_str(), password.as_str())),
            _ => None,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_filters_blank() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("".to_string())), None);
        assert_eq!(non_empty(Some("  ".to_string())), None);
        assert_eq!(non_empty(Some("x".to_string())), Some("x".to_string()));
    }

    #[test]
    fn test_cv_credentials_require_both_fields() {
        let mut cfg = EmailConfig {
            service_id: "s".to_string(),
            template_id: "t".to_string(),
            cv_template_id: Some("cv_t".to_string()),
            public_key: "k".to_string(),
            cv_password: None,
        };
        assert!(cfg.cv_credentials().is_none());

        cfg.cv_password = Some("hunter2".to_string());
        assert_eq!(cfg.cv_credentials(), Some(("cv_t", "hunter2")));
    }
}
