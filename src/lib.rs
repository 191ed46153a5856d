//! Pledge Thanks - Post-pledge thank-you screen orchestration
//!
//! After a backer pledges, this crate decides what the thank-you screen
//! shows: a shelf of related projects under the pledged project's root
//! category, and at most one follow-up prompt (app rating or games
//! newsletter signup).

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
