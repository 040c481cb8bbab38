//! Form controller: the draft's editable projection plus the submission
//! state machine.
//!
//! Kept free of DOM and reactive types so the whole contract can be
//! exercised directly. The view layer owns one `FormModel` in a signal and
//! forwards events to it.

use shopfront_core::{
    Field, MSG_PRICE_NUMBER, ProductDraft, ValidationErrors, parse_price, validate,
};

/// Submission state for one attempt. `Idle` is both initial and terminal;
/// `Submitting` is entered only from `Idle` and only after validation
/// passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
}

/// Resolution of a dispatched create-request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 200/201 — the product now exists on the server.
    Accepted,
    /// Any other status, or the request never made it out. The user is not
    /// told which.
    Rejected,
}

/// Local state owned by the form: the single draft instance being edited,
/// plus submission bookkeeping.
///
/// The price is held as raw text and parsed at validation time, so a
/// non-numeric entry is representable and blocks submission instead of
/// being silently swallowed by the input handler.
#[derive(Debug, Clone, PartialEq)]
pub struct FormModel {
    title: String,
    price: String,
    description: String,
    category_id: u32,
    images: Vec<String>,
    phase: SubmitPhase,
    attempted: bool,
    errors: ValidationErrors,
}

impl Default for FormModel {
    fn default() -> Self {
        Self::from_draft(ProductDraft::default())
    }
}

impl FormModel {
    fn from_draft(draft: ProductDraft) -> Self {
        Self {
            title: draft.title,
            price: draft.price.to_string(),
            description: draft.description,
            category_id: draft.category_id,
            images: draft.images,
            phase: SubmitPhase::Idle,
            attempted: false,
            errors: ValidationErrors::none(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category_id(&self) -> u32 {
        self.category_id
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn set_title(&mut self, value: String) {
        self.title = value;
        self.revalidate();
    }

    pub fn set_price(&mut self, value: String) {
        self.price = value;
        self.revalidate();
    }

    pub fn set_description(&mut self, value: String) {
        self.description = value;
        self.revalidate();
    }

    pub fn set_category(&mut self, id: u32) {
        self.category_id = id;
        self.revalidate();
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn has_error(&self, field: Field) -> bool {
        self.errors.has(field)
    }

    pub fn error_message(&self, field: Field) -> Option<&str> {
        self.errors.message_for(field)
    }

    /// Assemble and validate the draft from the current field values.
    pub fn draft(&self) -> Result<ProductDraft, ValidationErrors> {
        let mut errors = ValidationErrors::none();

        let price = match parse_price(&self.price) {
            Some(price) => price,
            None => {
                errors.push(Field::Price, MSG_PRICE_NUMBER);
                f64::NAN
            }
        };

        let draft = ProductDraft {
            title: self.title.clone(),
            price,
            description: self.description.clone(),
            category_id: self.category_id,
            images: self.images.clone(),
        };

        errors.merge(validate(&draft));
        if errors.is_empty() { Ok(draft) } else { Err(errors) }
    }

    /// Try to enter `Submitting`.
    ///
    /// Returns the validated draft to dispatch, or `None` when a request is
    /// already in flight or validation failed (field errors are recorded
    /// for display).
    pub fn begin_submit(&mut self) -> Option<ProductDraft> {
        if self.is_submitting() {
            return None;
        }
        self.attempted = true;

        match self.draft() {
            Ok(draft) => {
                self.errors = ValidationErrors::none();
                self.phase = SubmitPhase::Submitting;
                tracing::debug!(title = %draft.title, "submission started");
                Some(draft)
            }
            Err(errors) => {
                tracing::debug!(fields = errors.len(), "submission blocked by validation");
                self.errors = errors;
                None
            }
        }
    }

    /// Resolve the in-flight attempt and return to `Idle`.
    ///
    /// An accepted draft resets the form to defaults; a rejected one keeps
    /// every field so the user can retry without re-entering data.
    pub fn finish_submit(&mut self, outcome: SubmitOutcome) {
        tracing::debug!(?outcome, "submission finished");
        match outcome {
            SubmitOutcome::Accepted => *self = FormModel::default(),
            SubmitOutcome::Rejected => self.phase = SubmitPhase::Idle,
        }
    }

    /// Validation re-runs on every field change, but messages only start
    /// showing once a submission has been attempted.
    fn revalidate(&mut self) {
        if self.attempted {
            self.errors = match self.draft() {
                Ok(_) => ValidationErrors::none(),
                Err(errors) => errors,
            };
        }
    }
}
