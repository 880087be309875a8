//! Database utility functions.

use chrono::{DateTime, SubsecRound, Utc};
use uuid::Uuid;

/// Generate a 32-character hex ID for todo records
pub fn generate_entity_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Current time at millisecond precision
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}
