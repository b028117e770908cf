use crate::core;
use crate::error::OisResult;
use crate::excel::layout::{OIS_WORKBOOK_ENTRY, SPOT_CURVE_SHEET};
use crate::excel::{SpotCurveSheet, WorkbookImporter};
use crate::notify::{EmailMessage, Notifier, SmtpConfig, SmtpNotifier};
use crate::report;
use crate::source::Source;
use crate::types::OisSnapshot;
use chrono::{Local, NaiveDateTime};
use colored::Colorize;
use tracing::info;

/// Console timestamp, e.g. `2024-06-11 07:00:00`
fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Load the workbook from `source` and compute the day-over-day snapshot
pub fn fetch_snapshot(source: &Source) -> OisResult<OisSnapshot> {
    info!(source = %source.describe(), "loading OIS workbook");
    let bytes = source.load_workbook(OIS_WORKBOOK_ENTRY)?;
    snapshot_from_workbook(bytes)
}

/// Compute the snapshot from raw .xlsx bytes
pub fn snapshot_from_workbook(bytes: Vec<u8>) -> OisResult<OisSnapshot> {
    let mut importer = WorkbookImporter::from_bytes(bytes)?;
    let grid = importer.read_sheet(SPOT_CURVE_SHEET)?;
    let sheet = SpotCurveSheet::from_grid(&grid)?;
    let snapshot = core::build_snapshot(&sheet.header, &sheet.data_rows)?;

    info!(
        latest = %snapshot.latest_date,
        previous = %snapshot.previous_date,
        "snapshot computed"
    );
    Ok(snapshot)
}

/// Build the email for a snapshot
pub fn build_message(snapshot: &OisSnapshot, text_summary: &str) -> EmailMessage {
    EmailMessage {
        subject: report::subject(snapshot),
        text_body: text_summary.to_string(),
        html_body: Some(report::render_html(snapshot)),
    }
}

/// Send exactly one notification for the snapshot
pub fn deliver(
    snapshot: &OisSnapshot,
    text_summary: &str,
    notifier: &dyn Notifier,
) -> OisResult<()> {
    let message = build_message(snapshot, text_summary);
    notifier.send(&message)
}

/// Execute the run command: fetch, summarise, and email
pub fn run(source: Source, smtp: SmtpConfig) -> OisResult<()> {
    println!(
        "[{}] {}",
        timestamp(),
        "Starting OIS Daily Agent...".bold().green()
    );
    println!("{}", "Fetching Bank of England OIS data...".cyan());

    let snapshot = fetch_snapshot(&source)?;
    println!("{}", "✓ Data fetched successfully".green());

    let summary = report::render_text(&snapshot, now());
    println!("\n{}", summary);

    if !smtp.is_configured() {
        print_config_hint();
        return Ok(());
    }

    let notifier = SmtpNotifier::new(smtp);
    println!("\n{}", "Sending email notification...".cyan());
    deliver(&snapshot, &summary, &notifier)?;
    println!(
        "{}",
        format!("✓ Email sent successfully to {}", notifier.recipient()).green()
    );

    println!(
        "\n[{}] {}",
        timestamp(),
        "OIS Daily Agent completed".bold().green()
    );
    Ok(())
}

/// Execute the fetch command: print the summary without sending anything
pub fn fetch(source: Source, json: bool) -> OisResult<()> {
    let snapshot = fetch_snapshot(&source)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{}", report::render_text(&snapshot, now()));
    }
    Ok(())
}

/// Execute the config command: show the email settings in effect
pub fn show_config(smtp: SmtpConfig, json: bool) -> OisResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&smtp)?);
        return Ok(());
    }

    let or_unset = |value: &str| {
        if value.is_empty() {
            "Not configured".yellow().to_string()
        } else {
            value.to_string()
        }
    };

    println!("{}", "Email Sender Configuration:".bold());
    println!("SMTP Host: {}", smtp.host);
    println!("SMTP Port: {}", smtp.port);
    println!("SMTP User: {}", or_unset(&smtp.user));
    println!("From Email: {}", or_unset(smtp.from_address()));
    println!("To Email: {}", or_unset(&smtp.to_address));

    if !smtp.is_configured() {
        println!();
        print_config_hint();
    }
    Ok(())
}

fn print_config_hint() {
    println!(
        "\n{}",
        "⚠ Email not configured - skipping email send".yellow()
    );
    println!("To enable email, set these environment variables:");
    println!("  SMTP_USER, SMTP_PASSWORD, TO_EMAIL");
    println!("\nOptional (with defaults):");
    println!("  SMTP_HOST (default: smtp.gmail.com)");
    println!("  SMTP_PORT (default: 587)");
    println!("  FROM_EMAIL (default: same as SMTP_USER)");
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
