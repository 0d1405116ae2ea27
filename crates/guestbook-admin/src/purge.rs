use guestbook_db::Database;
use guestbook_db::models::AccountRow;
use tracing::info;

use crate::confirm::{AFFIRMATIVE, Confirmation};
use crate::error::OpError;

/// One guestbook as shown in the pre-deletion preview.
pub struct GuestbookPreview {
    pub id: i64,
    pub website_url: String,
    pub message_count: i64,
}

/// What a confirmed purge actually removed. Counts come from the DELETE
/// statements, not the preview, since the store may have moved between the
/// two.
#[derive(Debug)]
pub struct PurgeReport {
    pub account_id: i64,
    pub username: String,
    pub guestbooks_deleted: usize,
    pub messages_deleted: usize,
}

#[derive(Debug)]
pub enum PurgeOutcome {
    Deleted(PurgeReport),
    Declined,
}

/// Hard-delete an account and everything it owns, after showing the operator
/// exactly what is about to go. Irreversible once confirmed.
pub fn purge(
    db: &Database,
    confirmation: &mut dyn Confirmation,
    username: &str,
) -> Result<PurgeOutcome, OpError> {
    if username.is_empty() {
        return Err(OpError::InvalidInput("username must not be empty".into()));
    }

    let account = db
        .get_account_by_username(username)?
        .ok_or_else(|| OpError::NotFound(format!("no account with username '{username}'")))?;

    // Read-only traversal first, so the prompt is backed by real counts.
    let previews = collect_previews(db, &account)?;
    print_preview(&account, &previews);

    let prompt = format!(
        "Delete ALL data for this account? This cannot be undone. Type {AFFIRMATIVE} to continue:"
    );
    if !confirmation.confirm(&prompt) {
        return Ok(PurgeOutcome::Declined);
    }

    let counts = db.purge_account(account.id)?;
    info!(
        account_id = account.id,
        username = %account.username,
        guestbooks = counts.guestbooks,
        messages = counts.messages,
        "account purged"
    );

    Ok(PurgeOutcome::Deleted(PurgeReport {
        account_id: account.id,
        username: account.username,
        guestbooks_deleted: counts.guestbooks,
        messages_deleted: counts.messages,
    }))
}

fn collect_previews(db: &Database, account: &AccountRow) -> Result<Vec<GuestbookPreview>, OpError> {
    let guestbooks = db.guestbooks_for_account(account.id)?;
    let mut previews = Vec::with_capacity(guestbooks.len());
    for guestbook in guestbooks {
        let message_count = db.count_messages_for_guestbook(guestbook.id)?;
        previews.push(GuestbookPreview {
            id: guestbook.id,
            website_url: guestbook.website_url,
            message_count,
        });
    }
    Ok(previews)
}

fn print_preview(account: &AccountRow, previews: &[GuestbookPreview]) {
    println!(
        "Account: {} (id {}, {})",
        account.username, account.id, account.email
    );
    println!();
    println!(
        "Found {} guestbook(s) for {}",
        previews.len(),
        account.username
    );
    for preview in previews {
        println!(
            "  Guestbook {} ({}): {} message(s)",
            preview.id, preview.website_url, preview.message_count
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confirm::testing::Scripted;
    use crate::testutil::{row_totals, seeded_db};

    #[test]
    fn empty_username_is_rejected_before_any_lookup() {
        let (_dir, db) = seeded_db();
        let mut confirmation = Scripted::new(true);

        let err = purge(&db, &mut confirmation, "").unwrap_err();
        assert!(matches!(err, OpError::InvalidInput(_)));
        assert!(!confirmation.asked);
    }

    #[test]
    fn unknown_username_fails_without_prompting() {
        let (_dir, db) = seeded_db();
        let mut confirmation = Scripted::new(true);

        let err = purge(&db, &mut confirmation, "no-such-user").unwrap_err();
        assert!(matches!(err, OpError::NotFound(_)));
        assert!(!confirmation.asked);
        assert_eq!(row_totals(&db), (2, 2, 3));
    }

    #[test]
    fn preview_reports_per_guestbook_message_counts() {
        let (_dir, db) = seeded_db();
        let account = db.get_account_by_username("alice").unwrap().unwrap();

        let previews = collect_previews(&db, &account).unwrap();
        assert_eq!(previews.len(), 1);
        assert_eq!(previews[0].id, 3);
        assert_eq!(previews[0].website_url, "https://alice.example");
        assert_eq!(previews[0].message_count, 2);
    }

    #[test]
    fn decline_leaves_the_store_untouched() {
        let (_dir, db) = seeded_db();
        let mut confirmation = Scripted::new(false);

        let outcome = purge(&db, &mut confirmation, "alice").unwrap();
        assert!(matches!(outcome, PurgeOutcome::Declined));
        assert!(confirmation.asked);
        assert_eq!(row_totals(&db), (2, 2, 3));

        // Declining is repeatable with no side effects.
        let outcome = purge(&db, &mut Scripted::new(false), "alice").unwrap();
        assert!(matches!(outcome, PurgeOutcome::Declined));
        assert_eq!(row_totals(&db), (2, 2, 3));
    }

    #[test]
    fn confirmed_purge_removes_account_and_dependents() {
        let (_dir, db) = seeded_db();
        let mut confirmation = Scripted::new(true);

        let outcome = purge(&db, &mut confirmation, "alice").unwrap();
        let report = match outcome {
            PurgeOutcome::Deleted(report) => report,
            PurgeOutcome::Declined => panic!("purge was declined"),
        };
        assert_eq!(report.account_id, 7);
        assert_eq!(report.guestbooks_deleted, 1);
        assert_eq!(report.messages_deleted, 2);

        assert!(db.get_account_by_username("alice").unwrap().is_none());
        assert!(db.guestbooks_for_account(7).unwrap().is_empty());
        assert_eq!(db.count_messages_for_guestbook(3).unwrap(), 0);

        // Only bob's rows remain.
        assert_eq!(row_totals(&db), (1, 1, 1));
    }
}
