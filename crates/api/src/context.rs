use workboard_auth::Role;
use workboard_core::UserId;

/// Authenticated caller context for a request (identity + role).
///
/// Inserted by the auth middleware; its presence is the proof that the
/// bearer token checked out. The role travels with it for the presentation
/// layer's benefit — no route branches on it server-side.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AuthContext {
    user_id: UserId,
    role: Role,
}

impl AuthContext {
    pub fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn role(&self) -> Role {
        self.role
    }
}
