//! In-memory filtering of the user collection.

use crate::directory::UserRecord;

/// Case-insensitive substring filter over the searchable record fields:
/// name, username, email, phone and company name. A record matches when any
/// one of them contains the normalized (trimmed, case-folded) query.
///
/// An empty or all-whitespace query returns the collection unchanged.
/// Matching preserves the relative order of the input and never duplicates
/// records, so filtering an already-filtered collection with the same query
/// is a no-op.
pub fn filter_users(users: &[UserRecord], query: &str) -> Vec<UserRecord> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return users.to_vec();
    }
    users
        .iter()
        .filter(|u| {
            u.name.to_lowercase().contains(&q)
                || u.username.to_lowercase().contains(&q)
                || u.email.to_lowercase().contains(&q)
                || u.phone.to_lowercase().contains(&q)
                || u.company.name.to_lowercase().contains(&q)
        })
        .cloned()
        .collect()
}
