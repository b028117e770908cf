//! SMTP delivery through curl
//!
//! curl speaks SMTP with STARTTLS, so no mail crate is needed. Credentials
//! go through a curl config read from stdin to keep them out of the process
//! list.

use super::{EmailMessage, Notifier, SmtpConfig};
use crate::error::{OisError, OisResult};
use chrono::Local;
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// curl exit code for a rejected login
const CURL_LOGIN_DENIED: i32 = 67;

/// Implicit-TLS submission port; everything else upgrades with STARTTLS
const SMTPS_PORT: u16 = 465;

pub struct SmtpNotifier {
    config: SmtpConfig,
}

impl SmtpNotifier {
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    fn server_url(&self) -> String {
        let scheme = if self.config.port == SMTPS_PORT {
            "smtps"
        } else {
            "smtp"
        };
        format!("{}://{}:{}", scheme, self.config.host, self.config.port)
    }

    /// curl config carrying everything but the message itself
    fn curl_config(&self, message_path: &str) -> String {
        [
            ("url", self.server_url()),
            ("ssl-reqd", String::new()),
            ("mail-from", self.config.from_address().to_string()),
            ("mail-rcpt", self.config.to_address.clone()),
            (
                "user",
                format!("{}:{}", self.config.user, self.config.password),
            ),
            ("upload-file", message_path.to_string()),
        ]
        .iter()
        .map(|(key, value)| {
            if value.is_empty() {
                format!("{}\n", key)
            } else {
                format!("{} = {}\n", key, quote_curl_value(value))
            }
        })
        .collect()
    }
}

/// Quote a value for a curl config file
fn quote_curl_value(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

impl Notifier for SmtpNotifier {
    fn send(&self, message: &EmailMessage) -> OisResult<()> {
        if !self.config.has_credentials() {
            return Err(OisError::Notify("SMTP credentials not configured".to_string()));
        }
        if self.config.to_address.is_empty() {
            return Err(OisError::Notify("Recipient email not configured".to_string()));
        }

        let mime = message.to_mime(
            self.config.from_address(),
            &self.config.to_address,
            Local::now().fixed_offset(),
        );

        let message_file = write_message_file(&mime)?;

        debug!(server = %self.server_url(), "handing message to curl");
        run_curl(&self.curl_config(&message_file.path().display().to_string()))?;

        info!(to = %self.config.to_address, subject = %message.subject, "email sent");
        Ok(())
    }

    fn recipient(&self) -> String {
        self.config.to_address.clone()
    }
}

/// Spool the message to a fresh temp file, removed when the handle drops
fn write_message_file(mime: &str) -> OisResult<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("ois_email_")
        .suffix(".eml")
        .tempfile()?;
    file.write_all(mime.as_bytes())?;
    file.flush()?;
    Ok(file)
}

fn run_curl(config: &str) -> OisResult<()> {
    let mut child = Command::new("curl")
        .args(["-sS", "--config", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| OisError::Notify(format!("Failed to run curl: {}", e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(config.as_bytes())?;
    }

    let output = child
        .wait_with_output()
        .map_err(|e| OisError::Notify(format!("curl did not finish: {}", e)))?;

    match output.status.code() {
        Some(0) => Ok(()),
        Some(CURL_LOGIN_DENIED) => Err(OisError::Notify(
            "SMTP authentication failed - check username/password".to_string(),
        )),
        _ => Err(OisError::Notify(format!(
            "SMTP error: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        ))),
    }
}
