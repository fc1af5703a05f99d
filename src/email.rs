// Transactional email dispatch through the EmailJS REST endpoint.
// Callers spawn these sends and react to the returned outcome, if at all.

#![allow(dead_code)]

use reqwest::Client;
use serde::Serialize;

use crate::config::EmailConfig;
use crate::error::{FolioError, Result};

const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Fields of a contact-form message.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Result of a send, as shown to the user. Failures never propagate
/// past this boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct SendOutcome {
    pub success: bool,
    pub message: String,
}

impl SendOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[derive(Serialize)]
struct SendRequest<'a, P: Serialize> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: P,
}

#[derive(Serialize)]
struct ContactParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    subject: &'a str,
    message: &'a str,
}

#[derive(Serialize)]
struct CvPasswordParams<'a> {
    to_email: &'a str,
    password: &'a str,
}

/// Send a contact-form message.
pub async fn send_contact(client: &Client, config: &EmailConfig, msg: &ContactMessage) -> SendOutcome {
    let request = SendRequest {
        service_id: &config.service_id,
        template_id: &config.template_id,
        user_id: &config.public_key,
        template_params: ContactParams {
            from_name: &msg.name,
            from_email: &msg.email,
            subject: &msg.subject,
            message: &msg.message,
        },
    };

    match post(client, &request).await {
        Ok(()) => SendOutcome::success("Message sent successfully!"),
        Err(e) => SendOutcome::failure(format!("Failed to send message: {}", e)),
    }
}

/// Send the CV password to a recipient using the dedicated template.
pub async fn send_cv_password(
    client: &Client,
    config: &EmailConfig,
    recipient: &str,
) -> SendOutcome {
    let Some((template_id, password)) = config.cv_credentials() else {
        return SendOutcome::failure("CV password email is not configured.");
    };

    let request = SendRequest {
        service_id: &config.service_id,
        template_id,
        user_id: &config.public_key,
        template_params: CvPasswordParams {
            to_email: recipient,
            password,
        },
    };

    match post(client, &request).await {
        Ok(()) => SendOutcome::success("Password sent to your email."),
        Err(e) => SendOutcome::failure(format!("Failed to send password: {}", e)),
    }
}

async fn post<P: Serialize>(client: &Client, request: &SendRequest<'_, P>) -> Result<()> {
    let response = client
        .post(EMAILJS_ENDPOINT)
        .json(request)
        .send()
        .await
        .map_err(FolioError::Connection)?;

    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(FolioError::FetchFailed(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EmailConfig {
        EmailConfig {
            service_id: "svc".to_string(),
            template_id: "tpl".to_string(),
            cv_template_id: None,
            public_key: "key".to_string(),
            cv_password: None,
        }
    }

    #[test]
    fn test_send_request_serialization() {
        let request = SendRequest {
            service_id: "svc",
            template_id: "tpl",
            user_id: "key",
            template_params: ContactParams {
                from_name: "Ada",
                from_email: "ada@example.com",
                subject: "Hello",
                message: "Hi there",
            },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["service_id"], "svc");
        assert_eq!(json["template_params"]["from_name"], "Ada");
        assert_eq!(json["template_params"]["from_email"], "ada@example.com");
    }

    #[tokio::test]
    async fn test_cv_send_without_credentials_fails_locally() {
        // No cv template or password configured: no request is issued.
        let client = Client::new();
        let outcome = send_cv_password(&client, &config(), "a@b.c").await;
        assert!(!outcome.success);
        assert!(outcome.message.contains("not configured"));
    }
}
