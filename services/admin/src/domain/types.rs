use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Registered user profile. Owned by the identity service; only
/// `is_superadmin` matters to the access guard.
#[derive(Debug, Clone)]
pub struct Profile {
    pub id: Uuid,
    pub email: String,
    pub is_superadmin: bool,
    pub created_at: DateTime<Utc>,
}

/// The user behind a valid session, as reported by the identity service.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: String,
}

/// A named humor category grouping an ordered sequence of steps.
#[derive(Debug, Clone)]
pub struct HumorFlavor {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// One ordered instruction within a flavor's sequence.
#[derive(Debug, Clone)]
pub struct FlavorStep {
    pub id: Uuid,
    pub flavor_id: Uuid,
    pub step_number: i32,
    pub instruction: String,
    pub created_at: DateTime<Utc>,
}

/// Aggregate platform counters shown on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformStats {
    pub total_users: u64,
    pub total_images: u64,
    pub total_captions: u64,
    pub total_votes: u64,
    pub superadmins: u64,
    pub recent_users: u64,
}

/// Window for the dashboard's "new users" counter.
pub const RECENT_USER_WINDOW_DAYS: i64 = 7;

/// Trim a required text field. Returns `None` when nothing but whitespace
/// remains, which callers map to a validation error.
pub fn normalized_non_empty(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
