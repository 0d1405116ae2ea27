use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

/// Bootstrap the schema. Idempotent, so running against the main service's
/// live database is a no-op.
pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS accounts (
            id              INTEGER PRIMARY KEY,
            username        TEXT NOT NULL UNIQUE,
            email           TEXT NOT NULL,
            password_hash   TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS guestbooks (
            id                  INTEGER PRIMARY KEY,
            owner_account_id    INTEGER NOT NULL REFERENCES accounts(id),
            website_url         TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_guestbooks_owner
            ON guestbooks(owner_account_id);

        CREATE TABLE IF NOT EXISTS messages (
            id                  INTEGER PRIMARY KEY,
            owner_guestbook_id  INTEGER NOT NULL REFERENCES guestbooks(id),
            author_name         TEXT NOT NULL,
            body                TEXT NOT NULL,
            created_at          TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_messages_guestbook
            ON messages(owner_guestbook_id);
        ",
    )?;

    info!("Schema bootstrap complete");
    Ok(())
}
