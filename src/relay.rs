//! Outbound mail relay (EmailJS).
//!
//! Credentials are compiled in from `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID`
//! and `EMAILJS_PUBLIC_KEY`. Unset variables leave the placeholder values in
//! place and [`RelayConfig::is_configured`] reports false.

use async_trait::async_trait;
use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::contact::ContactForm;

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

const PLACEHOLDER_SERVICE_ID: &str = "your_service_id";
const PLACEHOLDER_TEMPLATE_ID: &str = "your_template_id";
const PLACEHOLDER_PUBLIC_KEY: &str = "your_public_key";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub to_name: String,
    pub to_email: String,
}

impl RelayConfig {
    pub fn from_build_env(to_name: &str, to_email: &str) -> Self {
        Self {
            service_id: option_env!("EMAILJS_SERVICE_ID")
                .unwrap_or(PLACEHOLDER_SERVICE_ID)
                .to_string(),
            template_id: option_env!("EMAILJS_TEMPLATE_ID")
                .unwrap_or(PLACEHOLDER_TEMPLATE_ID)
                .to_string(),
            public_key: option_env!("EMAILJS_PUBLIC_KEY")
                .unwrap_or(PLACEHOLDER_PUBLIC_KEY)
                .to_string(),
            to_name: to_name.to_string(),
            to_email: to_email.to_string(),
        }
    }

    pub fn is_configured(&self) -> bool {
        let set = |value: &str, placeholder: &str| !value.trim().is_empty() && value != placeholder;
        set(&self.service_id, PLACEHOLDER_SERVICE_ID)
            && set(&self.template_id, PLACEHOLDER_TEMPLATE_ID)
            && set(&self.public_key, PLACEHOLDER_PUBLIC_KEY)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_name: String,
    pub to_email: String,
}

/// Request body for the EmailJS send endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayMessage {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: TemplateParams,
}

impl RelayMessage {
    pub fn new(config: &RelayConfig, form: &ContactForm) -> Self {
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            user_id: config.public_key.clone(),
            template_params: TemplateParams {
                from_name: form.name.trim().to_string(),
                from_email: form.email.trim().to_string(),
                subject: form.subject.trim().to_string(),
                message: form.message.clone(),
                to_name: config.to_name.clone(),
                to_email: config.to_email.clone(),
            },
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("relay rejected message ({status}): {body}")]
    Status { status: StatusCode, body: String },
    #[error("relay request failed: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

#[async_trait(?Send)]
pub trait MailRelay {
    async fn send(&self, message: &RelayMessage) -> Result<(), RelayError>;
}

#[derive(Debug, Clone)]
pub struct EmailJsRelay {
    client: reqwest::Client,
    endpoint: String,
}

impl EmailJsRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl Default for EmailJsRelay {
    fn default() -> Self {
        Self::new(EMAILJS_ENDPOINT)
    }
}

#[async_trait(?Send)]
impl MailRelay for EmailJsRelay {
    async fn send(&self, message: &RelayMessage) -> Result<(), RelayError> {
        log::debug!("relaying contact message via {}", self.endpoint);
        let response = self
            .client
            .post(self.endpoint.as_str())
            .json(message)
            .send()
            .await
            .inspect_err(|err| log::error!("relay request failed: {err}"))?;

        let status = response.status();
        if status.is_success() {
            log::info!("contact message relayed");
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        log::error!("relay rejected message: {status} {body}");
        Err(RelayError::Status { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(service_id: &str) -> RelayConfig {
        RelayConfig {
            service_id: service_id.to_string(),
            template_id: "template_abc".to_string(),
            public_key: "key_123".to_string(),
            to_name: "Owner".to_string(),
            to_email: "owner@example.com".to_string(),
        }
    }

    #[test]
    fn test_placeholder_credentials_not_configured() {
        assert!(config("service_xyz").is_configured());
        assert!(!config(PLACEHOLDER_SERVICE_ID).is_configured());
        assert!(!config("").is_configured());
        assert!(!config("   ").is_configured());

        let mut no_key = config("service_xyz");
        no_key.public_key = PLACEHOLDER_PUBLIC_KEY.to_string();
        assert!(!no_key.is_configured());
    }

    #[test]
    fn test_message_payload_shape() {
        let form = ContactForm {
            name: " Ada ".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Line one\nLine two".to_string(),
        };
        let message = RelayMessage::new(&config("service_xyz"), &form);
        let json = serde_json::to_value(&message).unwrap();

        assert_eq!(json["service_id"], "service_xyz");
        assert_eq!(json["template_id"], "template_abc");
        assert_eq!(json["user_id"], "key_123");
        let params = &json["template_params"];
        assert_eq!(params["from_name"], "Ada");
        assert_eq!(params["from_email"], "ada@example.com");
        assert_eq!(params["subject"], "Hello");
        assert_eq!(params["message"], "Line one\nLine two");
        assert_eq!(params["to_name"], "Owner");
        assert_eq!(params["to_email"], "owner@example.com");
    }

    #[test]
    fn test_status_error_message() {
        let err = RelayError::Status {
            status: StatusCode::BAD_REQUEST,
            body: "The user ID is invalid".to_string(),
        };
        assert!(err.to_string().contains("400"));
        assert!(err.to_string().contains("user ID is invalid"));
    }
}
