//! ScheduleDialogsHandler - Picks at most one follow-up prompt per visit.
//!
//! The newsletter prompt targets backers of the configured category who have
//! never seen it and are not subscribed yet. Everyone else who has not rated
//! the app gets the rating prompt instead.

use std::sync::Arc;

use crate::config::DialogConfig;
use crate::domain::catalog::Category;
use crate::domain::thanks::{DialogDecision, DialogInputs};
use crate::ports::{CurrentUserSession, PreferenceKey, PreferenceStore};

pub struct ScheduleDialogsHandler {
    preferences: Arc<dyn PreferenceStore>,
    current_user: Arc<dyn CurrentUserSession>,
    config: DialogConfig,
}

impl ScheduleDialogsHandler {
    pub fn new(
        preferences: Arc<dyn PreferenceStore>,
        current_user: Arc<dyn CurrentUserSession>,
        config: DialogConfig,
    ) -> Self {
        Self {
            preferences,
            current_user,
            config,
        }
    }

    /// Decides which dialog to show for a visit whose root category is `root`.
    ///
    /// Choosing the newsletter prompt marks it as seen before returning.
    pub async fn handle(&self, root: &Category) -> DialogDecision {
        let inputs = self.gather_inputs(root).await;
        let decision = inputs.decide();

        if decision == DialogDecision::ShowNewsletter {
            if let Err(e) = self
                .preferences
                .set(PreferenceKey::HasSeenGamesNewsletter, true)
                .await
            {
                tracing::warn!(error = %e, "Failed to record newsletter dialog as seen");
            }
        }

        tracing::debug!(
            root_category = root.slug(),
            ?inputs,
            ?decision,
            "Dialog decision made"
        );
        decision
    }

    /// Reads every input exactly once.
    pub async fn gather_inputs(&self, root: &Category) -> DialogInputs {
        let is_signed_up_to_newsletter = self
            .current_user
            .current()
            .map(|user| user.is_signed_up_to_games_newsletter())
            .unwrap_or(false);

        let (seen_newsletter, seen_rating) = tokio::join!(
            self.read_flag(PreferenceKey::HasSeenGamesNewsletter),
            self.read_flag(PreferenceKey::HasSeenAppRating),
        );

        DialogInputs {
            is_games_category: root.slug() == self.config.newsletter_category_slug,
            has_seen_newsletter_dialog: seen_newsletter,
            is_signed_up_to_newsletter,
            has_seen_rating_dialog: seen_rating,
        }
    }

    /// Unreadable flags count as set so a broken store never spams prompts.
    async fn read_flag(&self, key: PreferenceKey) -> bool {
        match self.preferences.get(key).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(%key, error = %e, "Failed to read preference flag");
                true
            }
        }
    }
}
