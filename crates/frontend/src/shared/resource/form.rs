use contracts::validate::FieldErrors;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Closed,
    Create,
    Edit(String),
}

/// Modal form lifecycle: `Closed -> Create|Edit -> (Submitting) -> Closed`.
///
/// The draft captured at open time is kept aside so cancel can restore it
/// exactly, without a refetch; a failed submit re-opens the controls with
/// the draft intact.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState<D> {
    pub mode: FormMode,
    pub draft: D,
    saved: D,
    pub errors: FieldErrors,
    pub submitting: bool,
}

impl<D: Clone + Default> FormState<D> {
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.mode != FormMode::Closed
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn editing_id(&self) -> Option<&str> {
        match &self.mode {
            FormMode::Edit(id) => Some(id),
            _ => None,
        }
    }

    pub fn open_create(&mut self) {
        self.draft = D::default();
        self.saved = D::default();
        self.errors.clear();
        self.submitting = false;
        self.mode = FormMode::Create;
    }

    pub fn open_edit(&mut self, id: String, draft: D) {
        self.saved = draft.clone();
        self.draft = draft;
        self.errors.clear();
        self.submitting = false;
        self.mode = FormMode::Edit(id);
    }

    /// Close and revert the draft to the snapshot captured at open time.
    /// Ignored mid-submit; calling it again once closed is a no-op.
    pub fn cancel(&mut self) {
        if self.submitting {
            return;
        }
        self.draft = self.saved.clone();
        self.errors.clear();
        self.mode = FormMode::Closed;
    }

    /// Run one full validation pass. Returns whether submission may
    /// proceed; on failure the complete error map is installed and the
    /// form stays open.
    pub fn begin_submit(&mut self, validate: impl Fn(&D) -> FieldErrors) -> bool {
        if self.submitting || !self.is_open() {
            return false;
        }
        let errors = validate(&self.draft);
        if errors.is_empty() {
            self.errors.clear();
            self.submitting = true;
            true
        } else {
            self.errors = errors;
            false
        }
    }

    pub fn submit_failed(&mut self) {
        self.submitting = false;
    }

    pub fn submit_succeeded(&mut self) {
        self.draft = D::default();
        self.saved = D::default();
        self.errors.clear();
        self.submitting = false;
        self.mode = FormMode::Closed;
    }

    pub fn error_for(&self, field: &str) -> Option<String> {
        self.errors.get(field).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::leave::LeaveDraft;

    fn leave_draft(start: &str, end: &str) -> LeaveDraft {
        LeaveDraft {
            id: None,
            name: "Asha".to_string(),
            start_date: start.to_string(),
            end_date: end.to_string(),
            reason: "personal".to_string(),
        }
    }

    #[test]
    fn open_then_cancel_restores_the_pre_open_draft() {
        let mut form = FormState::<LeaveDraft>::closed();
        let before = form.draft.clone();

        form.open_create();
        form.draft.name = "edited".to_string();
        form.cancel();

        assert_eq!(form.draft, before);
        assert_eq!(form.mode, FormMode::Closed);
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut form = FormState::<LeaveDraft>::closed();
        form.open_edit("lv-1".to_string(), leave_draft("2025-03-01", "2025-03-02"));
        form.draft.reason = "changed".to_string();

        form.cancel();
        let after_first = form.clone();
        form.cancel();
        assert_eq!(form, after_first);
    }

    #[test]
    fn cancel_during_edit_restores_open_time_values() {
        let original = leave_draft("2025-03-01", "2025-03-02");
        let mut form = FormState::<LeaveDraft>::closed();
        form.open_edit("lv-1".to_string(), original.clone());

        form.draft.start_date = "2025-04-01".to_string();
        form.draft.reason = "something else".to_string();
        form.cancel();

        assert_eq!(form.draft, original);
    }

    #[test]
    fn invalid_draft_blocks_submission_and_fills_the_error_map() {
        let mut form = FormState::<LeaveDraft>::closed();
        form.open_create();
        form.draft = leave_draft("2025-03-10", "2025-03-05");

        let allowed = form.begin_submit(|d| d.validate());

        assert!(!allowed, "gateway call must not happen");
        assert!(!form.submitting);
        assert_eq!(form.mode, FormMode::Create, "form stays open");
        assert_eq!(
            form.error_for("endDate").as_deref(),
            Some("End date cannot be before start date")
        );
    }

    #[test]
    fn valid_draft_enters_submitting() {
        let mut form = FormState::<LeaveDraft>::closed();
        form.open_create();
        form.draft = leave_draft("2025-03-05", "2025-03-10");

        assert!(form.begin_submit(|d| d.validate()));
        assert!(form.submitting);

        // A second submit while in flight is refused.
        assert!(!form.begin_submit(|d| d.validate()));
    }

    #[test]
    fn failed_submit_keeps_the_draft_intact() {
        let mut form = FormState::<LeaveDraft>::closed();
        form.open_create();
        form.draft = leave_draft("2025-03-05", "2025-03-10");
        let submitted = form.draft.clone();

        assert!(form.begin_submit(|d| d.validate()));
        form.submit_failed();

        assert!(form.is_open());
        assert_eq!(form.draft, submitted);
    }

    #[test]
    fn successful_submit_closes_and_clears() {
        let mut form = FormState::<LeaveDraft>::closed();
        form.open_create();
        form.draft = leave_draft("2025-03-05", "2025-03-10");

        assert!(form.begin_submit(|d| d.validate()));
        form.submit_succeeded();

        assert_eq!(form.mode, FormMode::Closed);
        assert_eq!(form.draft, LeaveDraft::default());
    }
}
