use guestbook_db::Database;
use tracing::info;

use crate::confirm::{AFFIRMATIVE, Confirmation};
use crate::error::OpError;
use crate::password;

#[derive(Debug)]
pub enum ResetOutcome {
    /// Carries the new plaintext secret. It is shown to the operator once
    /// and exists nowhere else.
    Reset { username: String, secret: String },
    Declined,
}

/// Replace an account's password hash with the hash of a fresh random
/// secret. The plaintext is handed back to the caller for one-time display
/// and is never persisted or logged.
pub fn reset_credential(
    db: &Database,
    confirmation: &mut dyn Confirmation,
    raw_id: &str,
) -> Result<ResetOutcome, OpError> {
    let account_id: i64 = raw_id.trim().parse().map_err(|_| {
        OpError::InvalidInput(format!("account id must be an integer, got: {raw_id}"))
    })?;

    let account = db
        .get_account_by_id(account_id)?
        .ok_or_else(|| OpError::NotFound(format!("no account with id {account_id}")))?;

    println!("Found account:");
    println!("  ID:       {}", account.id);
    println!("  Username: {}", account.username);
    println!("  Email:    {}", account.email);
    println!();

    let prompt = format!("Reset this account's password? Type {AFFIRMATIVE} to continue:");
    if !confirmation.confirm(&prompt) {
        return Ok(ResetOutcome::Declined);
    }

    let secret = password::generate_secret();
    let hash = password::hash_secret(&secret)?;

    let changed = db.update_password_hash(account.id, &hash)?;
    if changed == 0 {
        return Err(OpError::NotFound(format!("no account with id {account_id}")));
    }

    info!(account_id = account.id, username = %account.username, "password hash replaced");

    Ok(ResetOutcome::Reset {
        username: account.username,
        secret,
    })
}
