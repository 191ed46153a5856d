//! Follow-up dialog decision and per-visit dialog lifecycle.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Which prompt, if any, the screen opens after entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogDecision {
    None,
    ShowRating,
    ShowNewsletter,
}

impl DialogDecision {
    /// Dialog state reached by acting on this decision.
    pub fn shown_state(&self) -> Option<DialogState> {
        match self {
            DialogDecision::None => None,
            DialogDecision::ShowRating => Some(DialogState::RatingShown),
            DialogDecision::ShowNewsletter => Some(DialogState::NewsletterShown),
        }
    }
}

/// Everything the decision depends on, captured once at decision time.
///
/// Holding plain booleans keeps a user-state change that lands after the
/// capture from altering a decision that was already made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DialogInputs {
    pub is_games_category: bool,
    pub has_seen_newsletter_dialog: bool,
    pub is_signed_up_to_newsletter: bool,
    pub has_seen_rating_dialog: bool,
}

impl DialogInputs {
    pub fn show_newsletter(&self) -> bool {
        self.is_games_category && !self.has_seen_newsletter_dialog && !self.is_signed_up_to_newsletter
    }

    /// The rating prompt yields to the newsletter prompt.
    pub fn show_rating(&self) -> bool {
        !self.has_seen_rating_dialog && !self.show_newsletter()
    }

    pub fn decide(&self) -> DialogDecision {
        if self.show_newsletter() {
            DialogDecision::ShowNewsletter
        } else if self.show_rating() {
            DialogDecision::ShowRating
        } else {
            DialogDecision::None
        }
    }
}

/// Dialogs shown so far in one screen visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DialogState {
    #[default]
    Idle,
    RatingShown,
    NewsletterShown,
    ConfirmShown,
}

impl StateMachine for DialogState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use DialogState::*;
        matches!(
            (self, target),
            (Idle, RatingShown) | (Idle, NewsletterShown) | (NewsletterShown, ConfirmShown)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use DialogState::*;
        match self {
            Idle => vec![RatingShown, NewsletterShown],
            NewsletterShown => vec![ConfirmShown],
            RatingShown | ConfirmShown => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_inputs() -> Vec<DialogInputs> {
        let mut inputs = Vec::new();
        for bits in 0..16u8 {
            inputs.push(DialogInputs {
                is_games_category: bits & 1 != 0,
                has_seen_newsletter_dialog: bits & 2 != 0,
                is_signed_up_to_newsletter: bits & 4 != 0,
                has_seen_rating_dialog: bits & 8 != 0,
            });
        }
        inputs
    }

    #[test]
    fn never_shows_both_prompts() {
        for inputs in all_inputs() {
            assert!(
                !(inputs.show_newsletter() && inputs.show_rating()),
                "both prompts for {:?}",
                inputs
            );
        }
    }

    #[test]
    fn newsletter_requires_games_unseen_and_not_signed_up() {
        for inputs in all_inputs() {
            let expected = inputs.is_games_category
                && !inputs.has_seen_newsletter_dialog
                && !inputs.is_signed_up_to_newsletter;
            assert_eq!(inputs.show_newsletter(), expected, "{:?}", inputs);
        }
    }

    #[test]
    fn fresh_games_visit_shows_newsletter_only() {
        let inputs = DialogInputs {
            is_games_category: true,
            ..Default::default()
        };
        assert_eq!(inputs.decide(), DialogDecision::ShowNewsletter);
    }

    #[test]
    fn non_games_visit_shows_rating() {
        assert_eq!(DialogInputs::default().decide(), DialogDecision::ShowRating);
    }

    #[test]
    fn signed_up_games_user_gets_rating_prompt() {
        let inputs = DialogInputs {
            is_games_category: true,
            is_signed_up_to_newsletter: true,
            ..Default::default()
        };
        assert_eq!(inputs.decide(), DialogDecision::ShowRating);
    }

    #[test]
    fn nothing_left_to_show() {
        let inputs = DialogInputs {
            is_games_category: true,
            has_seen_newsletter_dialog: true,
            has_seen_rating_dialog: true,
            ..Default::default()
        };
        assert_eq!(inputs.decide(), DialogDecision::None);
    }

    #[test]
    fn confirm_only_follows_newsletter() {
        assert!(DialogState::NewsletterShown
            .transition_to(DialogState::ConfirmShown)
            .is_ok());
        assert!(DialogState::Idle.transition_to(DialogState::ConfirmShown).is_err());
        assert!(DialogState::RatingShown
            .transition_to(DialogState::ConfirmShown)
            .is_err());
    }

    #[test]
    fn rating_and_newsletter_are_mutually_exclusive_states() {
        assert!(DialogState::RatingShown
            .transition_to(DialogState::NewsletterShown)
            .is_err());
        assert!(DialogState::NewsletterShown
            .transition_to(DialogState::RatingShown)
            .is_err());
        assert!(DialogState::ConfirmShown.is_terminal());
    }
}
