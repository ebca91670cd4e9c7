// src/domain/access.rs
use crate::domain::user::UserId;

/// What the caller is trying to do with a resource. Public news pages need
/// no decision at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Creating a comment or note, or browsing one's own notes.
    Create,
    /// Editing, deleting, or privately viewing an owned record.
    Modify,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    LoginRequired,
    /// The caller may not learn that the record exists.
    NotFound,
}

/// Owned records expose their owner for the equality check.
pub trait Owned {
    fn owner(&self) -> UserId;
}

/// Decide whether `actor` may perform `operation` on a record owned by `owner`.
///
/// `owner` is `None` when the owner-filtered lookup matched nothing, which
/// makes absent records and foreign records indistinguishable.
pub fn decide(actor: Option<UserId>, owner: Option<UserId>, operation: Operation) -> AccessDecision {
    match (operation, actor) {
        (_, None) => AccessDecision::LoginRequired,
        (Operation::Create, Some(_)) => AccessDecision::Allow,
        (Operation::Modify, Some(actor)) if owner == Some(actor) => AccessDecision::Allow,
        (Operation::Modify, Some(_)) => AccessDecision::NotFound,
    }
}
