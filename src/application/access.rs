// src/application/access.rs
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::access::{AccessDecision, Operation, Owned, decide},
};

/// Admit any authenticated caller; anonymous callers must log in first.
pub fn require_identity(actor: Option<&AuthenticatedUser>) -> ApplicationResult<&AuthenticatedUser> {
    match (decide(actor.map(|a| a.id), None, Operation::Create), actor) {
        (AccessDecision::Allow, Some(actor)) => Ok(actor),
        _ => Err(ApplicationError::AuthenticationRequired),
    }
}

/// Hand back `record` only when `actor` owns it. `record` comes from an
/// owner-filtered lookup, so a foreign record and a missing one both end here
/// as "not found".
pub fn require_owner<T: Owned>(
    actor: &AuthenticatedUser,
    record: Option<T>,
    what: &str,
) -> ApplicationResult<T> {
    let owner = record.as_ref().map(Owned::owner);
    match (decide(Some(actor.id), owner, Operation::Modify), record) {
        (AccessDecision::Allow, Some(record)) => Ok(record),
        (AccessDecision::LoginRequired, _) => Err(ApplicationError::AuthenticationRequired),
        _ => Err(ApplicationError::not_found(format!("{what} not found"))),
    }
}

/// Whether `actor` may see write forms on public pages.
pub fn can_write(actor: Option<&AuthenticatedUser>) -> bool {
    decide(actor.map(|a| a.id), None, Operation::Create) == AccessDecision::Allow
}
