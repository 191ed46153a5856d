//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, state machine, errors)
//! - `catalog` - Projects, categories and discovery queries
//! - `account` - The signed-in user and their location
//! - `thanks` - Dialog decision rules and recommendation merging

pub mod account;
pub mod catalog;
pub mod foundation;
pub mod thanks;
