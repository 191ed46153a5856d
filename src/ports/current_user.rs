//! CurrentUserSession port - Read access to the signed-in account.

use crate::domain::account::User;

/// Port for the account session.
///
/// The session owns the user's lifecycle; consumers only read the latest
/// value and latch it for the decision at hand.
pub trait CurrentUserSession: Send + Sync {
    /// Latest known user, if anyone is signed in.
    fn current(&self) -> Option<User>;
}
