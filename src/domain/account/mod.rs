//! Account module - the current user and their location.

mod user;

pub use user::{Location, User};
