//! Application layer - Handlers and the screen orchestrator.
//!
//! This layer coordinates domain rules with the ports. Every handler
//! degrades to an empty result instead of surfacing collaborator errors.

pub mod handlers;

pub use handlers::{
    NewsletterSignupHandler, ResolveRelatedProjectsHandler, ResolveRootCategoryHandler,
    ScheduleDialogsHandler, ScreenPorts, SignupOutcome, ThanksScreen,
};
