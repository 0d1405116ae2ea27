use crate::Database;
use crate::models::{AccountRow, GuestbookRow};
use anyhow::Result;
use rusqlite::{OptionalExtension, Row};

/// Rows removed by a confirmed purge, per table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurgeCounts {
    pub messages: usize,
    pub guestbooks: usize,
    pub accounts: usize,
}

impl Database {
    // -- Accounts --

    pub fn get_account_by_username(&self, username: &str) -> Result<Option<AccountRow>> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    "SELECT id, username, email, password_hash FROM accounts WHERE username = ?1",
                    [username],
                    read_account,
                )
                .optional()?;
            Ok(row)
        })
    }

    pub fn get_account_by_id(&self, id: i64) -> Result<Option<AccountRow>> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    "SELECT id, username, email, password_hash FROM accounts WHERE id = ?1",
                    [id],
                    read_account,
                )
                .optional()?;
            Ok(row)
        })
    }

    /// Overwrite one account's stored hash. Returns the number of rows
    /// changed; zero means the account vanished since it was looked up.
    pub fn update_password_hash(&self, account_id: i64, password_hash: &str) -> Result<usize> {
        self.with_conn(|conn| {
            let changed = conn.execute(
                "UPDATE accounts SET password_hash = ?1 WHERE id = ?2",
                rusqlite::params![password_hash, account_id],
            )?;
            Ok(changed)
        })
    }

    // -- Guestbooks --

    pub fn guestbooks_for_account(&self, account_id: i64) -> Result<Vec<GuestbookRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, owner_account_id, website_url FROM guestbooks
                     WHERE owner_account_id = ?1 ORDER BY id",
            )?;
            let rows = stmt
                .query_map([account_id], |row| {
                    Ok(GuestbookRow {
                        id: row.get(0)?,
                        owner_account_id: row.get(1)?,
                        website_url: row.get(2)?,
                    })
                })?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    // -- Messages --

    pub fn count_messages_for_guestbook(&self, guestbook_id: i64) -> Result<i64> {
        self.with_conn(|conn| {
            let count = conn.query_row(
                "SELECT COUNT(*) FROM messages WHERE owner_guestbook_id = ?1",
                [guestbook_id],
                |row| row.get(0),
            )?;
            Ok(count)
        })
    }

    // -- Purge --

    /// Delete the account and everything it owns in one transaction.
    /// Messages go before guestbooks before the account, so no orphaned
    /// reference is ever reachable even if the transaction guarantee is lost.
    pub fn purge_account(&self, account_id: i64) -> Result<PurgeCounts> {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;

            let messages = tx.execute(
                "DELETE FROM messages WHERE owner_guestbook_id IN
                     (SELECT id FROM guestbooks WHERE owner_account_id = ?1)",
                [account_id],
            )?;
            let guestbooks = tx.execute(
                "DELETE FROM guestbooks WHERE owner_account_id = ?1",
                [account_id],
            )?;
            let accounts = tx.execute("DELETE FROM accounts WHERE id = ?1", [account_id])?;

            tx.commit()?;
            Ok(PurgeCounts {
                messages,
                guestbooks,
                accounts,
            })
        })
    }
}

fn read_account(row: &Row<'_>) -> rusqlite::Result<AccountRow> {
    Ok(AccountRow {
        id: row.get(0)?,
        username: row.get(1)?,
        email: row.get(2)?,
        password_hash: row.get(3)?,
    })
}
