use std::fmt;

use crate::models::{Caller, Rating, Role, Store};

/// Outcome of an authorization check. The gate never mutates anything; it
/// only classifies a proposed action so callers can map the reason to a
/// precise user-facing error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Deny(DenyReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    SelfRatingForbidden,
    Unauthenticated,
    ForbiddenNotOwner,
}

impl DenyReason {
    pub fn code(&self) -> &'static str {
        match self {
            DenyReason::SelfRatingForbidden => "self-rating-forbidden",
            DenyReason::Unauthenticated => "unauthenticated",
            DenyReason::ForbiddenNotOwner => "forbidden-not-owner",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            DenyReason::SelfRatingForbidden => "You cannot rate your own store",
            DenyReason::Unauthenticated => "Authentication required",
            DenyReason::ForbiddenNotOwner => "You can only delete your own ratings",
        }
    }
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

/// Any authenticated role may rate a store it does not own.
pub fn can_submit_rating(caller: Option<&Caller>, store: &Store) -> AccessDecision {
    let Some(caller) = caller else {
        return AccessDecision::Deny(DenyReason::Unauthenticated);
    };

    if store.owner_id == caller.id {
        return AccessDecision::Deny(DenyReason::SelfRatingForbidden);
    }

    AccessDecision::Allow
}

/// A rating may be deleted by its author or by an admin.
pub fn can_delete_rating(caller: Option<&Caller>, rating: &Rating) -> AccessDecision {
    let Some(caller) = caller else {
        return AccessDecision::Deny(DenyReason::Unauthenticated);
    };

    if caller.role == Role::Admin || rating.user_id == caller.id {
        return AccessDecision::Allow;
    }

    AccessDecision::Deny(DenyReason::ForbiddenNotOwner)
}
