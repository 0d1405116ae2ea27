/// Database row types that map directly to SQLite rows.
/// Messages carry service-defined content columns the toolkit never reads,
/// so there is no MessageRow; only their counts matter here.

pub struct AccountRow {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

pub struct GuestbookRow {
    pub id: i64,
    pub owner_account_id: i64,
    pub website_url: String,
}
