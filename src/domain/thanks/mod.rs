//! Thank-you screen domain - dialog rules and the recommendation shelf.

mod dialog;
mod recommendations;

pub use dialog::{DialogDecision, DialogInputs, DialogState};
pub use recommendations::{merge_unique, Recommendations};
