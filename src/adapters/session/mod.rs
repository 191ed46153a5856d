//! Session Adapters
//!
//! Implementations of the CurrentUserSession port.

mod watch_session;

pub use watch_session::WatchCurrentUserSession;
