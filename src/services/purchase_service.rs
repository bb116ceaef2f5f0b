//! Purchase dialog workflow
//!
//! `Idle -> Drafting -> Submitting -> Idle`. A draft is opened from a listing,
//! edited freely, confirmed into a [`Submission`] and resolved once the
//! simulated processing delay has elapsed. Resolution always succeeds and
//! publishes exactly one toast; it never touches the wallet or the history.

use std::time::Duration;

use thiserror::Error;
use tokio::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::{Listing, Notification};
use crate::services::notification_service::Notifier;
use crate::services::price_service;

#[derive(Debug, Error, PartialEq)]
pub enum PurchaseError {
    #[error("No purchase dialog is open")]
    NoDraft,
    #[error("A purchase is already being processed")]
    InProgress,
    #[error("Amount must be a positive number, got '{0}'")]
    InvalidAmount(String),
    #[error("Submission {0} is not the one being processed")]
    UnknownSubmission(Uuid),
    #[error("Submission is still processing")]
    NotSettled,
}

/// The in-progress, user-editable purchase request
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseDraft<'a> {
    pub listing: &'a Listing,
    /// Raw text from the amount field, never validated while editing
    pub requested_amount: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PurchaseState<'a> {
    Idle,
    Drafting(PurchaseDraft<'a>),
    Submitting {
        draft: PurchaseDraft<'a>,
        submission_id: Uuid,
    },
}

/// Ticket for a confirmed purchase, resolved by [`PurchaseWorkflow::complete`]
#[derive(Debug)]
pub struct Submission {
    pub id: Uuid,
    /// Amount and total as they were when the purchase was confirmed
    pub requested_amount: String,
    pub total: String,
    deadline: Instant,
}

impl Submission {
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Wait out the simulated processing delay. Dropping the future abandons the wait.
    pub async fn settled(&self) {
        tokio::time::sleep_until(self.deadline).await;
    }
}

/// Everything the purchase dialog displays
#[derive(Debug, Clone, PartialEq)]
pub struct DialogView {
    pub listing_id: u32,
    pub seller: String,
    pub rating: f64,
    pub trades: u32,
    pub available: u64,
    pub requested_amount: String,
    pub quantity_label: String,
    pub unit_price: String,
    pub total: String,
    pub confirm_enabled: bool,
    pub cancel_enabled: bool,
    pub processing: bool,
}

pub struct PurchaseWorkflow<'a> {
    state: PurchaseState<'a>,
    submit_delay: Duration,
    toast_duration_ms: u64,
    notifier: Notifier,
}

impl<'a> PurchaseWorkflow<'a> {
    pub fn new(notifier: Notifier, submit_delay: Duration, toast_duration_ms: u64) -> Self {
        PurchaseWorkflow {
            state: PurchaseState::Idle,
            submit_delay,
            toast_duration_ms,
            notifier,
        }
    }

    pub fn state(&self) -> &PurchaseState<'a> {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, PurchaseState::Idle)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, PurchaseState::Submitting { .. })
    }

    fn draft(&self) -> Option<&PurchaseDraft<'a>> {
        match &self.state {
            PurchaseState::Idle => None,
            PurchaseState::Drafting(draft) => Some(draft),
            PurchaseState::Submitting { draft, .. } => Some(draft),
        }
    }

    /// Open the dialog for `listing` with the full listing amount prefilled.
    /// Reopening replaces an unconfirmed draft.
    pub fn open(&mut self, listing: &'a Listing) -> Result<(), PurchaseError> {
        if self.is_submitting() {
            return Err(PurchaseError::InProgress);
        }

        info!("Opening purchase dialog for listing {} ({})", listing.id, listing.seller);
        self.state = PurchaseState::Drafting(PurchaseDraft {
            listing,
            requested_amount: listing.amount.to_string(),
        });
        Ok(())
    }

    /// Replace the amount text. Accepted in any open state; a confirmed
    /// submission keeps the amount it was confirmed with.
    pub fn set_amount(&mut self, text: impl Into<String>) -> Result<(), PurchaseError> {
        let text = text.into();
        let draft = match &mut self.state {
            PurchaseState::Idle => return Err(PurchaseError::NoDraft),
            PurchaseState::Drafting(draft) => draft,
            PurchaseState::Submitting { draft, .. } => draft,
        };

        debug!("Requested amount changed: '{}' -> '{}'", draft.requested_amount, text);
        draft.requested_amount = text;
        Ok(())
    }

    pub fn can_confirm(&self) -> bool {
        match &self.state {
            PurchaseState::Drafting(draft) => price_service::is_positive_amount(&draft.requested_amount),
            _ => false,
        }
    }

    pub fn can_cancel(&self) -> bool {
        !self.is_submitting()
    }

    /// Current total as displayed, "0.00" when no dialog is open
    pub fn total(&self) -> String {
        match self.draft() {
            Some(draft) => price_service::format_total(draft.listing, &draft.requested_amount),
            None => "0.00".to_string(),
        }
    }

    /// Start processing the draft. The returned ticket settles after the submit delay.
    pub fn confirm(&mut self) -> Result<Submission, PurchaseError> {
        let draft = match &self.state {
            PurchaseState::Idle => return Err(PurchaseError::NoDraft),
            PurchaseState::Submitting { .. } => return Err(PurchaseError::InProgress),
            PurchaseState::Drafting(draft) => draft.clone(),
        };

        if !price_service::is_positive_amount(&draft.requested_amount) {
            return Err(PurchaseError::InvalidAmount(draft.requested_amount));
        }

        let submission = Submission {
            id: Uuid::new_v4(),
            requested_amount: draft.requested_amount.trim().to_string(),
            total: price_service::format_total(draft.listing, &draft.requested_amount),
            deadline: Instant::now() + self.submit_delay,
        };

        info!(
            "Submitting purchase {}: {} stars from {} for ${}",
            submission.id, submission.requested_amount, draft.listing.seller, submission.total
        );
        self.state = PurchaseState::Submitting {
            draft,
            submission_id: submission.id,
        };
        Ok(submission)
    }

    /// Resolve a settled submission: close the dialog and publish the success toast.
    /// Resolving the same ticket twice is rejected, so the toast is published once.
    pub fn complete(&mut self, submission: &Submission) -> Result<Notification, PurchaseError> {
        match &self.state {
            PurchaseState::Submitting { submission_id, .. } if *submission_id == submission.id => {}
            _ => return Err(PurchaseError::UnknownSubmission(submission.id)),
        }
        if Instant::now() < submission.deadline {
            return Err(PurchaseError::NotSettled);
        }

        self.state = PurchaseState::Idle;

        let notification = Notification::new(
            "✅ Purchase successful!",
            format!(
                "You bought {} ⭐ for ${}.",
                submission.requested_amount, submission.total
            ),
            self.toast_duration_ms,
        );
        info!("Purchase {} completed", submission.id);
        self.notifier.publish(notification.clone());
        Ok(notification)
    }

    /// Confirm and wait for the purchase in one step
    pub async fn submit(&mut self) -> Result<Notification, PurchaseError> {
        let submission = self.confirm()?;
        submission.settled().await;
        self.complete(&submission)
    }

    /// Close the dialog and discard the draft. Not allowed while processing.
    pub fn cancel(&mut self) -> Result<(), PurchaseError> {
        match self.state {
            PurchaseState::Submitting { .. } => Err(PurchaseError::InProgress),
            PurchaseState::Idle => Ok(()),
            PurchaseState::Drafting(_) => {
                debug!("Purchase dialog cancelled");
                self.state = PurchaseState::Idle;
                Ok(())
            }
        }
    }

    /// Snapshot of the open dialog, if any
    pub fn dialog(&self) -> Option<DialogView> {
        let draft = self.draft()?;
        let listing = draft.listing;
        let quantity_label = if draft.requested_amount.is_empty() {
            "0".to_string()
        } else {
            draft.requested_amount.clone()
        };

        Some(DialogView {
            listing_id: listing.id,
            seller: listing.seller.clone(),
            rating: listing.rating,
            trades: listing.trades,
            available: listing.amount,
            requested_amount: draft.requested_amount.clone(),
            quantity_label,
            unit_price: price_service::format_unit_price(listing),
            total: price_service::format_total(listing, &draft.requested_amount),
            confirm_enabled: self.can_confirm(),
            cancel_enabled: self.can_cancel(),
            processing: self.is_submitting(),
        })
    }
}
