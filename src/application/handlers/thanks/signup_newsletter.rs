//! NewsletterSignupHandler - Subscribes the signed-in user to the newsletter.
//!
//! German law requires an explicit double opt-in, so users located in
//! Germany are asked to confirm through the email they are about to get.

use std::sync::Arc;

use crate::domain::foundation::VisitId;
use crate::ports::{
    AnalyticsEvent, AnalyticsTracker, CurrentUserSession, ProjectCatalogClient, TrackedEvent,
};

/// Result of one signup attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupOutcome {
    /// Nobody is signed in; nothing was sent.
    NoUser,
    /// The settings update failed and was dropped.
    Failed,
    SignedUp { confirmation_required: bool },
}

impl SignupOutcome {
    pub fn requires_confirmation(&self) -> bool {
        matches!(
            self,
            SignupOutcome::SignedUp {
                confirmation_required: true
            }
        )
    }
}

pub struct NewsletterSignupHandler {
    catalog: Arc<dyn ProjectCatalogClient>,
    current_user: Arc<dyn CurrentUserSession>,
    analytics: Arc<dyn AnalyticsTracker>,
}

impl NewsletterSignupHandler {
    pub fn new(
        catalog: Arc<dyn ProjectCatalogClient>,
        current_user: Arc<dyn CurrentUserSession>,
        analytics: Arc<dyn AnalyticsTracker>,
    ) -> Self {
        Self {
            catalog,
            current_user,
            analytics,
        }
    }

    /// Sends a single settings update. Failures are logged, never retried.
    pub async fn handle(&self, visit_id: VisitId) -> SignupOutcome {
        let Some(user) = self.current_user.current() else {
            tracing::debug!("Newsletter signup ignored without a signed-in user");
            return SignupOutcome::NoUser;
        };

        let updated = user.clone().with_games_newsletter(true);
        if let Err(e) = self.catalog.update_user_settings(&updated).await {
            tracing::warn!(user_id = %user.id, error = %e, "Newsletter signup failed");
            return SignupOutcome::Failed;
        }

        self.analytics.track(TrackedEvent::new(
            visit_id,
            AnalyticsEvent::NewsletterToggle { enabled: true },
        ));

        let confirmation_required = self
            .current_user
            .current()
            .map(|user| user.is_location_germany())
            .unwrap_or(false);

        tracing::info!(user_id = %user.id, confirmation_required, "Signed up to newsletter");
        SignupOutcome::SignedUp {
            confirmation_required,
        }
    }
}
