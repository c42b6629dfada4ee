use thiserror::Error;

pub const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const DEFAULT_RECIPIENT_NAME: &str = "AsuVens AI Team";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} was not set when the site was built")]
    Missing(&'static str),
}

/// Provider identifiers baked in at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub recipient_name: String,
}

impl EmailJsConfig {
    /// Builds the config from optional raw values, rejecting blanks.
    pub fn from_parts(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
        endpoint: Option<&str>,
        recipient_name: Option<&str>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            service_id: required("EMAILJS_SERVICE_ID", service_id)?,
            template_id: required("EMAILJS_TEMPLATE_ID", template_id)?,
            public_key: required("EMAILJS_PUBLIC_KEY", public_key)?,
            endpoint: non_blank(endpoint).unwrap_or(DEFAULT_EMAILJS_ENDPOINT).to_string(),
            recipient_name: non_blank(recipient_name).unwrap_or(DEFAULT_RECIPIENT_NAME).to_string(),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn required(name: &'static str, value: Option<&str>) -> Result<String, ConfigError> {
    non_blank(value).map(str::to_string).ok_or(ConfigError::Missing(name))
}

pub fn get_emailjs_config() -> Result<EmailJsConfig, ConfigError> {
    EmailJsConfig::from_parts(
        option_env!("EMAILJS_SERVICE_ID"),
        option_env!("EMAILJS_TEMPLATE_ID"),
        option_env!("EMAILJS_PUBLIC_KEY"),
        option_env!("EMAILJS_ENDPOINT"),
        option_env!("CONTACT_RECIPIENT_NAME"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_fill_optional_values() {
        let config = EmailJsConfig::from_parts(Some("svc"), Some("tpl"), Some("key"), None, Some("  "))
            .unwrap();
        assert_eq!(config.endpoint, DEFAULT_EMAILJS_ENDPOINT);
        assert_eq!(config.recipient_name, DEFAULT_RECIPIENT_NAME);
        assert_eq!(config.service_id, "svc");
    }

    #[test]
    fn missing_identifier_is_named() {
        let err = EmailJsConfig::from_parts(Some("svc"), Some(""), Some("key"), None, None)
            .unwrap_err();
        assert_eq!(err, ConfigError::Missing("EMAILJS_TEMPLATE_ID"));
        assert_eq!(err.to_string(), "EMAILJS_TEMPLATE_ID was not set when the site was built");
    }
}
