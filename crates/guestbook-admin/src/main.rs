mod confirm;
mod error;
mod password;
mod purge;
mod reset;
#[cfg(test)]
mod testutil;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use guestbook_db::Database;

use crate::confirm::StdinConfirmation;
use crate::error::OpError;
use crate::purge::PurgeOutcome;
use crate::reset::ResetOutcome;

/// Operator toolkit for guestbook data custody: hard-deletes an account with
/// everything it owns, or resets an account's password out of band. Every
/// destructive step shows what it found and asks first.
#[derive(Parser)]
#[command(name = "guestbook-admin", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Permanently delete an account and every guestbook and message it owns
    Purge {
        /// Username of the account to purge
        username: String,
    },
    /// Replace an account's password with a fresh random one
    ResetCredential {
        /// Numeric id of the account
        account_id: String,
    },
}

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap would exit 2 on a usage error; the tool's contract is 1.
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<(), OpError> {
    let db_path = PathBuf::from(
        std::env::var("GUESTBOOK_DB_PATH").unwrap_or_else(|_| "guestbook.db".into()),
    );
    let db = Database::open(&db_path)?;

    let mut confirmation = StdinConfirmation;

    match cli.command {
        Command::Purge { username } => {
            match purge::purge(&db, &mut confirmation, &username)? {
                PurgeOutcome::Deleted(report) => {
                    println!(
                        "Data deleted: account '{}' (id {}), {} guestbook(s), {} message(s).",
                        report.username,
                        report.account_id,
                        report.guestbooks_deleted,
                        report.messages_deleted
                    );
                }
                PurgeOutcome::Declined => println!("Data not deleted."),
            }
        }
        Command::ResetCredential { account_id } => {
            match reset::reset_credential(&db, &mut confirmation, &account_id)? {
                ResetOutcome::Reset { username, secret } => {
                    println!();
                    println!("Password reset successful!");
                    println!();
                    println!("New password for '{username}':");
                    println!();
                    println!("    {secret}");
                    println!();
                    println!("It is shown only this once and cannot be recovered afterwards.");
                    println!("Send it to the user over a secure channel; they should change it after their next login.");
                }
                ResetOutcome::Declined => println!("Aborted."),
            }
        }
    }

    Ok(())
}
