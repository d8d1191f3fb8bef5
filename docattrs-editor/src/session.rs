//! One attribute edit session: a draft plus the persistence hand-off.
//!
//! All draft mutations are synchronous and run on one logical thread; the
//! only async boundary is submission. The session tracks a single in-flight
//! submission and refuses to start another until the first settles. A
//! session that is abandoned is simply dropped — it holds no external
//! resources.

use async_trait::async_trait;
use docattrs_schema::{AttributeLimits, DataAttribute, Localizer, SubmittableAttribute};
use tracing::debug;

use crate::draft::AttributeDraft;
use crate::error::{EditorError, PersistenceError, Result};

/// Hands a finalized attribute to the backing store.
///
/// Implemented by the host's API client. Failures are surfaced to the
/// caller unchanged; no retries happen at this layer.
#[async_trait]
pub trait PersistenceClient: Send + Sync {
    async fn submit(
        &self,
        attribute: SubmittableAttribute,
    ) -> std::result::Result<DataAttribute, PersistenceError>;
}

/// A single edit session over one attribute draft.
#[derive(Debug)]
pub struct EditSession<C> {
    draft: AttributeDraft,
    client: C,
    submitting: bool,
}

impl<C: PersistenceClient> EditSession<C> {
    /// Start a session creating a new attribute.
    pub fn create(client: C, limits: AttributeLimits) -> Self {
        debug!("starting create session");
        Self {
            draft: AttributeDraft::new(limits),
            client,
            submitting: false,
        }
    }

    /// Start a session editing an existing attribute.
    pub fn edit(client: C, limits: AttributeLimits, attribute: &DataAttribute) -> Self {
        debug!(name = %attribute.name, "starting edit session");
        Self {
            draft: AttributeDraft::from_attribute(attribute, limits),
            client,
            submitting: false,
        }
    }

    /// The current draft.
    pub fn draft(&self) -> &AttributeDraft {
        &self.draft
    }

    /// Mutable access to the draft for edit operations.
    pub fn draft_mut(&mut self) -> &mut AttributeDraft {
        &mut self.draft
    }

    /// Whether a submission is pending with the persistence collaborator.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validate and snapshot the draft, marking the session as submitting.
    ///
    /// Hosts that drive the persistence future themselves pair this with
    /// [`finish_submit`](Self::finish_submit); [`submit`](Self::submit)
    /// composes the two.
    pub fn begin_submit(&mut self) -> Result<SubmittableAttribute> {
        if self.submitting {
            return Err(EditorError::SubmissionInFlight);
        }
        let payload = self.draft.finalize()?;
        self.submitting = true;
        Ok(payload)
    }

    /// Mark the pending submission as settled.
    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    /// Submit the draft to the persistence collaborator.
    ///
    /// On failure the error is propagated unchanged and the draft is left
    /// as-is so the user can correct and retry.
    pub async fn submit(&mut self) -> Result<DataAttribute> {
        let payload = self.begin_submit()?;
        debug!(name = %payload.name, update = payload.id.is_some(), "submitting attribute");
        let outcome = self.client.submit(payload).await;
        self.finish_submit();
        Ok(outcome?)
    }

    /// Localized label for the submit button: Save/Saving… when editing,
    /// Create/Creating… when creating.
    pub fn submit_label(&self, localizer: &dyn Localizer) -> String {
        match (self.draft.is_edit(), self.submitting) {
            (true, false) => localizer.translate("Save"),
            (true, true) => format!("{}…", localizer.translate("Saving")),
            (false, false) => localizer.translate("Create"),
            (false, true) => format!("{}…", localizer.translate("Creating")),
        }
    }
}
