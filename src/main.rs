use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use ois_daily::cli;
use ois_daily::error::OisResult;
use ois_daily::notify::config::{DEFAULT_SMTP_HOST, DEFAULT_SMTP_PORT};
use ois_daily::notify::SmtpConfig;
use ois_daily::source::{Source, BOE_YIELD_CURVE_URL};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "ois")]
#[command(about = "Daily Bank of England OIS rates: 2yr, 5yr and 10yr with day-over-day changes")]
#[command(long_about = "OIS Daily - Bank of England OIS spot-curve summary

Downloads the latest yield curve archive, reads the '4. spot curve' sheet of
the OIS workbook, and reports the 2yr / 5yr / 10yr rates for the two most
recent dates with the change in basis points.

COMMANDS:
  run     - Fetch, print the summary, and email it (run daily from cron)
  fetch   - Fetch and print the summary only
  config  - Show the email settings in effect

EXAMPLES:
  ois run                                  # Daily job
  ois fetch --json                         # Snapshot as JSON
  ois fetch --archive latest-yield-curve-data.zip
  SMTP_USER=me@gmail.com SMTP_PASSWORD=... TO_EMAIL=desk@example.com ois run")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch rates, print the summary, and send the email
    Run {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        smtp: SmtpArgs,
    },

    /// Fetch rates and print the summary without sending anything
    Fetch {
        #[command(flatten)]
        source: SourceArgs,

        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the email configuration
    Config {
        #[command(flatten)]
        smtp: SmtpArgs,

        /// Print the configuration as JSON (password omitted)
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
#[group(multiple = false)]
struct SourceArgs {
    /// Archive URL to download
    #[arg(long, default_value = BOE_YIELD_CURVE_URL)]
    url: String,

    /// Read a previously downloaded archive instead of downloading
    #[arg(long, value_name = "ZIP")]
    archive: Option<PathBuf>,

    /// Read the OIS workbook directly
    #[arg(long, value_name = "XLSX")]
    workbook: Option<PathBuf>,
}

impl From<SourceArgs> for Source {
    fn from(args: SourceArgs) -> Self {
        match (args.archive, args.workbook) {
            (Some(path), _) => Source::Archive(path),
            (None, Some(path)) => Source::Workbook(path),
            (None, None) => Source::Remote { url: args.url },
        }
    }
}

#[derive(Args)]
struct SmtpArgs {
    /// SMTP server
    #[arg(long, env = "SMTP_HOST", default_value = DEFAULT_SMTP_HOST)]
    smtp_host: String,

    /// SMTP port (587 STARTTLS, 465 implicit TLS)
    #[arg(long, env = "SMTP_PORT", default_value_t = DEFAULT_SMTP_PORT)]
    smtp_port: u16,

    /// SMTP login
    #[arg(long, env = "SMTP_USER", default_value = "")]
    smtp_user: String,

    /// SMTP password
    #[arg(long, env = "SMTP_PASSWORD", default_value = "", hide_env_values = true)]
    smtp_password: String,

    /// Sender address (default: same as SMTP user)
    #[arg(long, env = "FROM_EMAIL")]
    from_email: Option<String>,

    /// Recipient address
    #[arg(long, env = "TO_EMAIL", default_value = "")]
    to_email: String,
}

impl From<SmtpArgs> for SmtpConfig {
    fn from(args: SmtpArgs) -> Self {
        SmtpConfig {
            host: args.smtp_host,
            port: args.smtp_port,
            user: args.smtp_user,
            password: args.smtp_password,
            from_address: args.from_email,
            to_address: args.to_email,
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ois_daily=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn dispatch(command: Commands) -> OisResult<()> {
    match command {
        Commands::Run { source, smtp } => cli::run(source.into(), smtp.into()),

        Commands::Fetch { source, json } => cli::fetch(source.into(), json),

        Commands::Config { smtp, json } => cli::show_config(smtp.into(), json),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match dispatch(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "ERROR:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
