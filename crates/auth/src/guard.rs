use thiserror::Error;

use workboard_core::UserId;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OwnershipError {
    #[error("caller does not own the resource")]
    NotOwner,
}

/// The single ownership check used by every mutating route: equality between
/// the caller and the resource's owning identity.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
///
/// Callers decide how to surface a denial; the HTTP layer maps it to the same
/// 404 as a missing record so ownership failures do not disclose existence.
pub fn authorize_owner(caller: UserId, owner: UserId) -> Result<(), OwnershipError> {
    if caller == owner {
        Ok(())
    } else {
        Err(OwnershipError::NotOwner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_is_authorized() {
        let id = UserId::new();
        assert_eq!(authorize_owner(id, id), Ok(()));
    }

    #[test]
    fn non_owner_is_denied() {
        assert_eq!(
            authorize_owner(UserId::new(), UserId::new()),
            Err(OwnershipError::NotOwner)
        );
    }
}
