//! formlab CLI
//!
//! Command-line tool for validating and submitting login and edit-user
//! payloads.

mod input;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use formlab_actions::{submit_edit_user, submit_login, ActionResponse};
use formlab_auth::{AuthConfig, InMemoryBackend, MOCK_USER_ID};
use formlab_schema::{base_fields, region_fields, EditUserFormState, Region, AVAILABLE_GAMES};
use serde::Serialize;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use crate::input::{read_submission, InputFormat};

/// Validate and submit formlab payloads.
#[derive(Parser)]
#[command(name = "formlab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Encoding of payloads read by `login` and `edit-user`.
    #[arg(short, long, value_enum, env = "FORMLAB_INPUT_FORMAT", default_value = "json")]
    format: InputFormat,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a login payload against the demo account.
    Login {
        /// Payload file (stdin if omitted or `-`).
        payload: Option<PathBuf>,

        /// Failed attempts after which an email is rate limited.
        #[arg(long, env = "FORMLAB_MAX_FAILED_ATTEMPTS", default_value_t = 5)]
        max_failed_attempts: u32,

        /// Minutes a rate limit lasts, counted from the first failure.
        #[arg(long, env = "FORMLAB_LOCKOUT_MINUTES", default_value_t = 15)]
        lockout_minutes: i64,

        /// Lifetime of a session, in days.
        #[arg(long, env = "FORMLAB_SESSION_DAYS", default_value_t = 1)]
        session_days: i64,
    },

    /// Submit an edit-user payload.
    EditUser {
        /// Payload file (stdin if omitted or `-`).
        payload: Option<PathBuf>,

        /// Id reported in the user summary.
        #[arg(long, default_value = MOCK_USER_ID)]
        user_id: String,
    },

    /// Print the initial edit-user payload for a region.
    Defaults {
        /// Region to start from.
        #[arg(short, long, default_value = "EU")]
        region: Region,
    },

    /// List the edit-user fields shown for a region.
    Fields {
        /// Region whose block is listed after the base fields.
        #[arg(short, long, default_value = "EU")]
        region: Region,
    },

    /// Print the game catalog.
    Catalog,
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn finish<T: Serialize>(response: &ActionResponse<T>) -> anyhow::Result<ExitCode> {
    info!(status = response.status, "{}", response.status_text());
    print_json(&response.body)?;
    Ok(if response.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays valid JSON
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Login {
            payload,
            max_failed_attempts,
            lockout_minutes,
            session_days,
        } => {
            let config = AuthConfig {
                max_failed_attempts,
                lockout_minutes,
                session_days,
                ..AuthConfig::default()
            };
            debug!(?config, "auth config");
            let auth = InMemoryBackend::new(config).with_mock_user()?;
            let submission = read_submission(payload.as_deref(), cli.format)?;
            finish(&submit_login(&auth, &submission))
        }

        Commands::EditUser { payload, user_id } => {
            let submission = read_submission(payload.as_deref(), cli.format)?;
            finish(&submit_edit_user(&user_id, &submission))
        }

        Commands::Defaults { region } => {
            let mut state = EditUserFormState::new();
            state.switch_region(region);
            print_json(&state.to_request())?;
            Ok(ExitCode::SUCCESS)
        }

        Commands::Fields { region } => {
            println!("{:<24} {:<28} REQUIRED", "NAME", "LABEL");
            println!("{:-<62}", "");
            let block = region.block_key();
            let rows = base_fields()
                .iter()
                .map(|f| (f.name.clone(), f))
                .chain(
                    region_fields(region)
                        .iter()
                        .map(|f| (format!("{block}.{}", f.name), f)),
                );
            for (name, field) in rows {
                let required = if field.required { "yes" } else { "no" };
                println!("{name:<24} {:<28} {required}", field.label);
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Catalog => {
            print_json(&AVAILABLE_GAMES)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
