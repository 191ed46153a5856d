//! ThanksScreen - One visit of the post-pledge thank-you screen.
//!
//! Inputs are plain method calls; outputs are channels the presentation
//! layer subscribes to. Latest-value outputs (`project_name`,
//! `recommendations`) use `watch`, one-shot events use `broadcast`.
//!
//! ```text
//! enter(project)
//!   ├─ project_name
//!   ├─ root category ─┬─ dialog scheduler ── show_rating_dialog | show_newsletter_dialog
//!   │                 └─ recommendations (only with a root category)
//!   └─ related ─────────┘
//! signup_to_newsletter_click ── show_confirm_newsletter_dialog
//! ```
//!
//! `teardown` cancels everything in flight; cancelled work never emits and
//! never writes preferences.

use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use tokio::sync::{broadcast, watch};
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

use super::{
    NewsletterSignupHandler, ResolveRelatedProjectsHandler, ResolveRootCategoryHandler,
    ScheduleDialogsHandler,
};
use crate::config::{DialogConfig, RecommendationConfig};
use crate::domain::catalog::{Category, DiscoveryQuery, Project};
use crate::domain::foundation::{StateMachine, ValidationError, VisitId};
use crate::domain::thanks::{DialogDecision, DialogState, Recommendations};
use crate::ports::{
    AnalyticsEvent, AnalyticsTracker, CurrentUserSession, PreferenceStore, ProjectCatalogClient,
    TrackedEvent,
};

const EVENT_CAPACITY: usize = 16;

/// Collaborators a screen visit talks to.
#[derive(Clone)]
pub struct ScreenPorts {
    pub catalog: Arc<dyn ProjectCatalogClient>,
    pub preferences: Arc<dyn PreferenceStore>,
    pub current_user: Arc<dyn CurrentUserSession>,
    pub analytics: Arc<dyn AnalyticsTracker>,
}

pub struct ThanksScreen {
    visit_id: VisitId,
    cancel: CancellationToken,
    project: OnceLock<Project>,
    dialog_state: Mutex<DialogState>,

    root_category: ResolveRootCategoryHandler,
    related_projects: ResolveRelatedProjectsHandler,
    dialogs: ScheduleDialogsHandler,
    signup: NewsletterSignupHandler,
    analytics: Arc<dyn AnalyticsTracker>,

    project_name: watch::Sender<Option<String>>,
    recommendations: watch::Sender<Option<Recommendations>>,
    start_discovery: broadcast::Sender<DiscoveryQuery>,
    start_project: broadcast::Sender<Project>,
    start_share: broadcast::Sender<Project>,
    start_share_on_facebook: broadcast::Sender<Project>,
    start_share_on_twitter: broadcast::Sender<Project>,
    show_rating_dialog: broadcast::Sender<()>,
    show_newsletter_dialog: broadcast::Sender<()>,
    show_confirm_newsletter_dialog: broadcast::Sender<()>,
}

impl ThanksScreen {
    pub fn new(
        ports: ScreenPorts,
        recommendations: RecommendationConfig,
        dialogs: DialogConfig,
    ) -> Self {
        let ScreenPorts {
            catalog,
            preferences,
            current_user,
            analytics,
        } = ports;

        Self {
            visit_id: VisitId::new(),
            cancel: CancellationToken::new(),
            project: OnceLock::new(),
            dialog_state: Mutex::new(DialogState::default()),

            root_category: ResolveRootCategoryHandler::new(catalog.clone()),
            related_projects: ResolveRelatedProjectsHandler::new(catalog.clone(), recommendations),
            dialogs: ScheduleDialogsHandler::new(preferences, current_user.clone(), dialogs),
            signup: NewsletterSignupHandler::new(catalog, current_user, analytics.clone()),
            analytics,

            project_name: watch::channel(None).0,
            recommendations: watch::channel(None).0,
            start_discovery: broadcast::channel(EVENT_CAPACITY).0,
            start_project: broadcast::channel(EVENT_CAPACITY).0,
            start_share: broadcast::channel(EVENT_CAPACITY).0,
            start_share_on_facebook: broadcast::channel(EVENT_CAPACITY).0,
            start_share_on_twitter: broadcast::channel(EVENT_CAPACITY).0,
            show_rating_dialog: broadcast::channel(EVENT_CAPACITY).0,
            show_newsletter_dialog: broadcast::channel(EVENT_CAPACITY).0,
            show_confirm_newsletter_dialog: broadcast::channel(EVENT_CAPACITY).0,
        }
    }

    pub fn visit_id(&self) -> VisitId {
        self.visit_id
    }

    pub fn dialog_state(&self) -> DialogState {
        *self.dialog_state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_torn_down(&self) -> bool {
        self.cancel.is_cancelled()
    }

    // ════════════════════════════════════════════════════════════════════
    // Inputs
    // ════════════════════════════════════════════════════════════════════

    /// Starts the visit for the just-pledged project. Only the first call
    /// has any effect.
    pub async fn enter(&self, project: Project) {
        if self.cancel.is_cancelled() {
            tracing::debug!(visit_id = %self.visit_id, "Enter after teardown ignored");
            return;
        }
        if self.project.set(project.clone()).is_err() {
            tracing::debug!(visit_id = %self.visit_id, "Screen already entered");
            return;
        }

        let span = tracing::info_span!(
            "thanks_screen",
            visit_id = %self.visit_id,
            project_id = %project.id
        );

        async {
            self.project_name.send_replace(Some(project.name.clone()));

            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => {
                    tracing::debug!("Screen torn down before resolution");
                }
                _ = self.resolve(&project) => {}
            }
        }
        .instrument(span)
        .await
    }

    pub fn share_click(&self) {
        self.share(&self.start_share, AnalyticsEvent::CheckoutShowShareSheet);
    }

    pub fn share_on_facebook_click(&self) {
        self.share(
            &self.start_share_on_facebook,
            AnalyticsEvent::CheckoutShowFacebookShareView,
        );
    }

    pub fn share_on_twitter_click(&self) {
        self.share(
            &self.start_share_on_twitter,
            AnalyticsEvent::CheckoutShowTwitterShareView,
        );
    }

    /// A recommended project was tapped.
    pub fn project_click(&self, project: Project) {
        if self.cancel.is_cancelled() {
            return;
        }
        self.track(AnalyticsEvent::CheckoutFinishJumpToProject);
        let _ = self.start_project.send(project);
    }

    /// The root category header was tapped.
    pub fn category_click(&self, category: &Category) {
        if self.cancel.is_cancelled() {
            return;
        }
        self.track(AnalyticsEvent::CheckoutFinishJumpToDiscovery);
        let _ = self.start_discovery.send(DiscoveryQuery::for_category(category));
    }

    pub async fn signup_to_newsletter_click(&self) {
        let outcome = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => return,
            outcome = self.signup.handle(self.visit_id) => outcome,
        };

        if !outcome.requires_confirmation() {
            return;
        }
        match self.advance_dialog(DialogState::ConfirmShown) {
            Ok(()) => {
                let _ = self.show_confirm_newsletter_dialog.send(());
            }
            Err(e) => {
                tracing::debug!(visit_id = %self.visit_id, error = %e, "Confirmation dialog suppressed");
            }
        }
    }

    /// Cancels in-flight work. Idempotent.
    pub fn teardown(&self) {
        if !self.cancel.is_cancelled() {
            tracing::debug!(visit_id = %self.visit_id, "Tearing down thanks screen");
            self.cancel.cancel();
        }
    }

    // ════════════════════════════════════════════════════════════════════
    // Outputs
    // ════════════════════════════════════════════════════════════════════

    pub fn project_name(&self) -> watch::Receiver<Option<String>> {
        self.project_name.subscribe()
    }

    pub fn recommendations(&self) -> watch::Receiver<Option<Recommendations>> {
        self.recommendations.subscribe()
    }

    pub fn start_discovery(&self) -> broadcast::Receiver<DiscoveryQuery> {
        self.start_discovery.subscribe()
    }

    pub fn start_project(&self) -> broadcast::Receiver<Project> {
        self.start_project.subscribe()
    }

    pub fn start_share(&self) -> broadcast::Receiver<Project> {
        self.start_share.subscribe()
    }

    pub fn start_share_on_facebook(&self) -> broadcast::Receiver<Project> {
        self.start_share_on_facebook.subscribe()
    }

    pub fn start_share_on_twitter(&self) -> broadcast::Receiver<Project> {
        self.start_share_on_twitter.subscribe()
    }

    pub fn show_rating_dialog(&self) -> broadcast::Receiver<()> {
        self.show_rating_dialog.subscribe()
    }

    pub fn show_newsletter_dialog(&self) -> broadcast::Receiver<()> {
        self.show_newsletter_dialog.subscribe()
    }

    pub fn show_confirm_newsletter_dialog(&self) -> broadcast::Receiver<()> {
        self.show_confirm_newsletter_dialog.subscribe()
    }

    // ════════════════════════════════════════════════════════════════════
    // Internals
    // ════════════════════════════════════════════════════════════════════

    async fn resolve(&self, project: &Project) {
        // Dialogs depend on the root category only.
        let root_then_dialogs = async {
            let root = self.root_category.handle(project).await?;
            let decision = self.dialogs.handle(&root).await;
            self.show_dialog(decision);
            Some(root)
        };

        let (root, related) = tokio::join!(
            root_then_dialogs,
            self.related_projects.handle(project),
        );

        let Some(root) = root else {
            tracing::debug!("No root category; skipping recommendations and dialogs");
            return;
        };

        self.recommendations.send_replace(Some(Recommendations {
            projects: related,
            root_category: root,
        }));
    }

    fn show_dialog(&self, decision: DialogDecision) {
        let Some(next) = decision.shown_state() else {
            return;
        };
        if let Err(e) = self.advance_dialog(next) {
            tracing::warn!(error = %e, "Dialog already shown this visit");
            return;
        }
        let channel = match decision {
            DialogDecision::ShowRating => &self.show_rating_dialog,
            DialogDecision::ShowNewsletter => &self.show_newsletter_dialog,
            DialogDecision::None => return,
        };
        let _ = channel.send(());
    }

    fn advance_dialog(&self, next: DialogState) -> Result<(), ValidationError> {
        let mut state = self
            .dialog_state
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *state = state.transition_to(next)?;
        Ok(())
    }

    fn share(&self, channel: &broadcast::Sender<Project>, event: AnalyticsEvent) {
        if self.cancel.is_cancelled() {
            return;
        }
        let Some(project) = self.project.get() else {
            tracing::debug!(visit_id = %self.visit_id, "Share ignored before enter");
            return;
        };
        self.track(event);
        let _ = channel.send(project.clone());
    }

    fn track(&self, event: AnalyticsEvent) {
        self.analytics.track(TrackedEvent::new(self.visit_id, event));
    }
}
