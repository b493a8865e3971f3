//! Request context carrying the authenticated staff member.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use musicadrive_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Extracted by the API layer and passed into service methods so that
/// every operation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated staff member's ID.
    pub user_id: Uuid,
    /// The staff member's role at the time the JWT was issued.
    pub role: UserRole,
    /// Display name (convenience field from JWT claims).
    pub name: String,
    /// IP address of the request origin.
    pub ip_address: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, role: UserRole, name: String, ip_address: String) -> Self {
        Self {
            user_id,
            role,
            name,
            ip_address,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the current staff member is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
