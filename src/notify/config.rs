//! SMTP settings for the email notifier

use serde::Serialize;

pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Email delivery configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    #[serde(skip_serializing)]
    pub password: String,
    /// Sender address; falls back to `user` when unset
    pub from_address: Option<String>,
    pub to_address: String,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SMTP_HOST.to_string(),
            port: DEFAULT_SMTP_PORT,
            user: String::new(),
            password: String::new(),
            from_address: None,
            to_address: String::new(),
        }
    }
}

impl SmtpConfig {
    pub fn from_address(&self) -> &str {
        self.from_address
            .as_deref()
            .filter(|addr| !addr.is_empty())
            .unwrap_or(&self.user)
    }

    /// Enough settings to attempt delivery (user and recipient)
    pub fn is_configured(&self) -> bool {
        !self.user.is_empty() && !self.to_address.is_empty()
    }

    pub fn has_credentials(&self) -> bool {
        !self.user.is_empty() && !self.password.is_empty()
    }
}
