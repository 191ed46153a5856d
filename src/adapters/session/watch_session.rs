//! Watch-channel Current User Session
//!
//! Holds the signed-in user in a `tokio::sync::watch` channel: the owner
//! replaces the value, readers take a snapshot of the latest one.

use tokio::sync::watch;

use crate::domain::account::User;
use crate::ports::CurrentUserSession;

/// Session whose owner pushes user changes and readers snapshot them.
#[derive(Debug)]
pub struct WatchCurrentUserSession {
    sender: watch::Sender<Option<User>>,
}

impl WatchCurrentUserSession {
    /// Create a session with nobody signed in.
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self { sender }
    }

    /// Create a session with `user` signed in.
    pub fn signed_in(user: User) -> Self {
        let (sender, _) = watch::channel(Some(user));
        Self { sender }
    }

    pub fn login(&self, user: User) {
        tracing::debug!(user_id = %user.id, "Session user signed in");
        self.sender.send_replace(Some(user));
    }

    /// Replace the user after their settings changed.
    pub fn refresh(&self, user: User) {
        self.sender.send_replace(Some(user));
    }

    pub fn logout(&self) {
        tracing::debug!("Session user signed out");
        self.sender.send_replace(None);
    }
}

impl Default for WatchCurrentUserSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CurrentUserSession for WatchCurrentUserSession {
    fn current(&self) -> Option<User> {
        self.sender.borrow().clone()
    }
}
