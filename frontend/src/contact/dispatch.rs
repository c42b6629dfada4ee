use futures::future::LocalBoxFuture;
use serde::Serialize;
use thiserror::Error;

use crate::config::{self, EmailJsConfig};
use crate::utils::api::Api;

use super::form::FormData;

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Email delivery is not configured: {0}")]
    NotConfigured(#[from] config::ConfigError),
    #[error("Failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Email provider rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// A validated submission, ready to hand to the delivery provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl From<&FormData> for ContactMessage {
    fn from(data: &FormData) -> Self {
        Self {
            name: data.name.trim().to_string(),
            email: data.email.trim().to_string(),
            phone: data.phone.trim().to_string(),
            message: data.message.trim().to_string(),
        }
    }
}

/// Delivers contact messages somewhere a human will read them.
#[cfg_attr(test, mockall::automock)]
pub trait EmailDispatcher {
    fn dispatch(&self, message: &ContactMessage) -> LocalBoxFuture<'static, Result<(), DispatchError>>;
}

#[derive(Serialize, Debug, PartialEq)]
struct TemplateParams {
    from_name: String,
    from_email: String,
    phone: String,
    message: String,
    to_name: String,
}

#[derive(Serialize, Debug, PartialEq)]
struct SendRequest {
    service_id: String,
    template_id: String,
    user_id: String,
    template_params: TemplateParams,
}

impl SendRequest {
    fn new(config: &EmailJsConfig, message: &ContactMessage) -> Self {
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            user_id: config.public_key.clone(),
            template_params: TemplateParams {
                from_name: message.name.clone(),
                from_email: message.email.clone(),
                phone: message.phone.clone(),
                message: message.message.clone(),
                to_name: config.recipient_name.clone(),
            },
        }
    }
}

/// EmailJS REST client. Configuration problems surface per dispatch so the
/// page still renders when identifiers are missing.
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    config: Result<EmailJsConfig, config::ConfigError>,
}

impl EmailJsClient {
    pub fn from_build_env() -> Self {
        let config = config::get_emailjs_config();
        if let Err(e) = &config {
            log::warn!("Contact form will not deliver messages: {}", e);
        }
        Self { config }
    }
}

impl EmailDispatcher for EmailJsClient {
    fn dispatch(&self, message: &ContactMessage) -> LocalBoxFuture<'static, Result<(), DispatchError>> {
        let prepared = self
            .config
            .clone()
            .map_err(DispatchError::from)
            .and_then(|config| {
                let request = Api::post(&config.endpoint)
                    .header("Accept", "text/plain")
                    .json(&SendRequest::new(&config, message))?;
                Ok(request)
            });

        Box::pin(async move {
            let response = prepared?
                .send()
                .await
                .map_err(|e| DispatchError::Network(e.to_string()))?;
            if response.ok() {
                log::info!("Contact message delivered");
                Ok(())
            } else {
                Err(DispatchError::Rejected {
                    status: response.status,
                    body: response.body,
                })
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn payload_matches_emailjs_shape() {
        let config = EmailJsConfig::from_parts(Some("svc_1"), Some("tpl_1"), Some("pk_1"), None, None)
            .unwrap();
        let message = ContactMessage {
            name: "Asha".into(),
            email: "asha@example.com".into(),
            phone: "9876543210".into(),
            message: "Need a chatbot for support.".into(),
        };

        let value = serde_json::to_value(SendRequest::new(&config, &message)).unwrap();
        assert_eq!(
            value,
            json!({
                "service_id": "svc_1",
                "template_id": "tpl_1",
                "user_id": "pk_1",
                "template_params": {
                    "from_name": "Asha",
                    "from_email": "asha@example.com",
                    "phone": "9876543210",
                    "message": "Need a chatbot for support.",
                    "to_name": config::DEFAULT_RECIPIENT_NAME,
                }
            })
        );
    }

    #[test]
    fn message_is_trimmed_from_form() {
        let data = FormData {
            name: "  Asha ".into(),
            email: "asha@example.com\n".into(),
            phone: " 9876543210".into(),
            message: " hello there friends ".into(),
        };
        let message = ContactMessage::from(&data);
        assert_eq!(message.name, "Asha");
        assert_eq!(message.phone, "9876543210");
        assert_eq!(message.message, "hello there friends");
    }

    #[test]
    fn unconfigured_client_fails_without_network() {
        let client = EmailJsClient {
            config: Err(config::ConfigError::Missing("EMAILJS_SERVICE_ID")),
        };
        let message = ContactMessage::from(&FormData::default());
        let result = futures::executor::block_on(client.dispatch(&message));
        assert!(matches!(result, Err(DispatchError::NotConfigured(_))));
    }
}
