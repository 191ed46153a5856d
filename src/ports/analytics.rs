//! AnalyticsTracker port - Fire-and-forget user action tracking.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, VisitId};

/// User-facing actions on the thank-you screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnalyticsEvent {
    CheckoutFinishJumpToDiscovery,
    CheckoutFinishJumpToProject,
    CheckoutShowShareSheet,
    CheckoutShowFacebookShareView,
    CheckoutShowTwitterShareView,
    NewsletterToggle { enabled: bool },
}

impl AnalyticsEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::CheckoutFinishJumpToDiscovery => "checkout.finish.jump_to_discovery",
            AnalyticsEvent::CheckoutFinishJumpToProject => "checkout.finish.jump_to_project",
            AnalyticsEvent::CheckoutShowShareSheet => "checkout.show_share_sheet",
            AnalyticsEvent::CheckoutShowFacebookShareView => "checkout.show_facebook_share_view",
            AnalyticsEvent::CheckoutShowTwitterShareView => "checkout.show_twitter_share_view",
            AnalyticsEvent::NewsletterToggle { .. } => "newsletter.toggle",
        }
    }
}

/// An event with the visit it happened in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedEvent {
    pub visit_id: VisitId,
    pub event: AnalyticsEvent,
    pub occurred_at: Timestamp,
}

impl TrackedEvent {
    pub fn new(visit_id: VisitId, event: AnalyticsEvent) -> Self {
        Self {
            visit_id,
            event,
            occurred_at: Timestamp::now(),
        }
    }
}

/// Port for the analytics sink. No response is expected and no caller
/// logic depends on delivery.
pub trait AnalyticsTracker: Send + Sync {
    fn track(&self, event: TrackedEvent);
}
