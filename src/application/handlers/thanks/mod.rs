//! Thank-you screen handlers.
//!
//! - `ResolveRootCategoryHandler` - Top-level category of the pledged project
//! - `ResolveRelatedProjectsHandler` - Three-source recommendation shelf
//! - `ScheduleDialogsHandler` - Rating vs newsletter prompt
//! - `NewsletterSignupHandler` - Newsletter subscription and DE confirmation
//! - `ThanksScreen` - Wires the above into one screen visit

mod resolve_related_projects;
mod resolve_root_category;
mod schedule_dialogs;
mod screen;
mod signup_newsletter;

pub use resolve_related_projects::{RecommendationSource, ResolveRelatedProjectsHandler};
pub use resolve_root_category::ResolveRootCategoryHandler;
pub use schedule_dialogs::ScheduleDialogsHandler;
pub use screen::{ScreenPorts, ThanksScreen};
pub use signup_newsletter::{NewsletterSignupHandler, SignupOutcome};
