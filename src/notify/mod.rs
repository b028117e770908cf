//! Outbound notification of the daily summary

pub mod config;
pub mod smtp;

pub use config::SmtpConfig;
pub use smtp::SmtpNotifier;

use crate::error::OisResult;
use chrono::{DateTime, FixedOffset};

/// A message with plain-text and HTML alternatives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub subject: String,
    pub text_body: String,
    pub html_body: Option<String>,
}

impl EmailMessage {
    /// Serialize as an RFC 5322 message, `multipart/alternative` when there
    /// is an HTML body
    pub fn to_mime(&self, from: &str, to: &str, date: DateTime<FixedOffset>) -> String {
        let mut out = String::new();
        out.push_str(&format!("From: {}\r\n", from));
        out.push_str(&format!("To: {}\r\n", to));
        out.push_str(&format!("Subject: {}\r\n", self.subject));
        out.push_str(&format!("Date: {}\r\n", date.to_rfc2822()));
        out.push_str("MIME-Version: 1.0\r\n");

        match &self.html_body {
            Some(html) => {
                let boundary = format!("ois-{}", date.timestamp());
                out.push_str(&format!(
                    "Content-Type: multipart/alternative; boundary=\"{}\"\r\n\r\n",
                    boundary
                ));
                push_part(&mut out, &boundary, "text/plain", &self.text_body);
                push_part(&mut out, &boundary, "text/html", html);
                out.push_str(&format!("--{}--\r\n", boundary));
            }
            None => {
                out.push_str("Content-Type: text/plain; charset=utf-8\r\n");
                out.push_str("Content-Transfer-Encoding: 8bit\r\n\r\n");
                out.push_str(&crlf(&self.text_body));
                out.push_str("\r\n");
            }
        }

        out
    }
}

fn push_part(out: &mut String, boundary: &str, content_type: &str, body: &str) {
    out.push_str(&format!("--{}\r\n", boundary));
    out.push_str(&format!("Content-Type: {}; charset=utf-8\r\n", content_type));
    out.push_str("Content-Transfer-Encoding: 8bit\r\n\r\n");
    out.push_str(&crlf(body));
    out.push_str("\r\n");
}

/// SMTP wants CRLF line endings
fn crlf(body: &str) -> String {
    body.lines().collect::<Vec<_>>().join("\r\n")
}

/// Delivers a formatted message to its configured recipient
pub trait Notifier {
    fn send(&self, message: &EmailMessage) -> OisResult<()>;

    /// Human-readable destination, for console output
    fn recipient(&self) -> String;
}
