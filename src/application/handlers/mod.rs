//! Application handlers.
//!
//! Handlers that orchestrate domain rules over the ports.

pub mod thanks;

pub use thanks::{
    NewsletterSignupHandler, RecommendationSource, ResolveRelatedProjectsHandler,
    ResolveRootCategoryHandler, ScheduleDialogsHandler, ScreenPorts, SignupOutcome, ThanksScreen,
};
