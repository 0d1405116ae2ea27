use guestbook_db::Database;
use tempfile::TempDir;

/// Scratch database seeded with two accounts: alice (id 7) owning guestbook
/// 3 with messages 1 and 2, and bob (id 8) owning guestbook 4 with message 5.
pub fn seeded_db() -> (TempDir, Database) {
    let dir = TempDir::new().expect("create temp dir");
    let db = Database::open(&dir.path().join("guestbook.db")).expect("open db");
    db.with_conn(|conn| {
        conn.execute_batch(
            "INSERT INTO accounts (id, username, email, password_hash) VALUES
                 (7, 'alice', 'alice@example.com', 'hash-alice'),
                 (8, 'bob', 'bob@example.com', 'hash-bob');
             INSERT INTO guestbooks (id, owner_account_id, website_url) VALUES
                 (3, 7, 'https://alice.example'),
                 (4, 8, 'https://bob.example');
             INSERT INTO messages (id, owner_guestbook_id, author_name, body) VALUES
                 (1, 3, 'visitor', 'first!'),
                 (2, 3, 'visitor', 'hello again'),
                 (5, 4, 'visitor', 'hi bob');",
        )?;
        Ok(())
    })
    .expect("seed db");
    (dir, db)
}

/// (accounts, guestbooks, messages) row counts.
pub fn row_totals(db: &Database) -> (i64, i64, i64) {
    db.with_conn(|conn| {
        let accounts: i64 = conn.query_row("SELECT COUNT(*) FROM accounts", [], |r| r.get(0))?;
        let guestbooks: i64 =
            conn.query_row("SELECT COUNT(*) FROM guestbooks", [], |r| r.get(0))?;
        let messages: i64 = conn.query_row("SELECT COUNT(*) FROM messages", [], |r| r.get(0))?;
        Ok((accounts, guestbooks, messages))
    })
    .expect("count rows")
}

pub fn password_hash(db: &Database, account_id: i64) -> String {
    db.get_account_by_id(account_id)
        .expect("lookup account")
        .expect("account exists")
        .password_hash
}
