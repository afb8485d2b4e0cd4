//! Nomination wizard state machine.
//!
//! # Responsibility
//! - Collect nomination input over three linear steps.
//! - Guard every forward transition with that step's validation.
//! - Submit through `AwardsStore::add_nomination` and keep the issued
//!   reference id for the confirmation screen.
//!
//! # Invariants
//! - `Next` never skips a step and never leaves a step that fails validation.
//! - `Previous` never validates and never goes below step 1.
//! - `Submitted` is terminal; only `restart` leaves it.
//! - A failed submit keeps the wizard on the review step and is not retried.
//! - Supporting documents are carried to the store untouched.

use crate::model::category::CategoryId;
use crate::model::nomination::{DocumentRef, NewNomination, Nomination};
use crate::model::reference_id::ReferenceId;
use crate::repo::category_repo::CategoryRepository;
use crate::repo::nomination_repo::NominationRepository;
use crate::store::{AwardsStore, StoreError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Number of input steps before `Submitted`.
pub const WIZARD_TOTAL_STEPS: u8 = 3;
/// `nominated_by` value used when no session user is set.
pub const DEFAULT_NOMINATOR: &str = "Manager";

/// Wizard position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    NomineeInfo,
    CategoryAndJustification,
    ReviewAndSubmit,
    Submitted,
}

impl WizardStep {
    /// 1-based step number; `Submitted` reports the last step.
    pub fn number(self) -> u8 {
        match self {
            Self::NomineeInfo => 1,
            Self::CategoryAndJustification => 2,
            Self::ReviewAndSubmit | Self::Submitted => 3,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Submitted)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::NomineeInfo => "nominee_info",
            Self::CategoryAndJustification => "category_and_justification",
            Self::ReviewAndSubmit => "review_and_submit",
            Self::Submitted => "submitted",
        }
    }

    fn forward(self) -> Option<Self> {
        match self {
            Self::NomineeInfo => Some(Self::CategoryAndJustification),
            Self::CategoryAndJustification => Some(Self::ReviewAndSubmit),
            Self::ReviewAndSubmit | Self::Submitted => None,
        }
    }

    fn back(self) -> Self {
        match self {
            Self::NomineeInfo | Self::CategoryAndJustification => Self::NomineeInfo,
            Self::ReviewAndSubmit => Self::CategoryAndJustification,
            Self::Submitted => Self::Submitted,
        }
    }
}

impl Display for WizardStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Draft input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardField {
    NomineeId,
    NomineeName,
    CategoryId,
    Justification,
}

impl WizardField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NomineeId => "nominee_id",
            Self::NomineeName => "nominee_name",
            Self::CategoryId => "category_id",
            Self::Justification => "justification",
        }
    }
}

/// One failed field check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldIssue {
    /// Required field is empty or whitespace.
    Blank(WizardField),
    /// Selected category is unknown or not Active.
    CategoryNotActive(CategoryId),
}

impl FieldIssue {
    pub fn field(&self) -> WizardField {
        match self {
            Self::Blank(field) => *field,
            Self::CategoryNotActive(_) => WizardField::CategoryId,
        }
    }
}

impl Display for FieldIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank(field) => write!(f, "{} is required", field.as_str()),
            Self::CategoryNotActive(id) => {
                write!(f, "category {id} is not an active award category")
            }
        }
    }
}

/// Rejected wizard action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    /// Step guard failed; the wizard stays on `step`.
    Validation {
        step: WizardStep,
        issues: Vec<FieldIssue>,
    },
    /// Action has no meaning on the current step.
    InvalidAction {
        step: WizardStep,
        action: &'static str,
    },
    /// The wizard already reached `Submitted`.
    AlreadySubmitted,
    /// The store refused the nomination.
    Store(StoreError),
}

impl WizardError {
    /// Failing fields, empty for non-validation errors.
    pub fn fields(&self) -> Vec<WizardField> {
        match self {
            Self::Validation { issues, .. } => issues.iter().map(FieldIssue::field).collect(),
            _ => Vec::new(),
        }
    }
}

impl Display for WizardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation { step, issues } => {
                write!(f, "step {step} is incomplete: ")?;
                for (index, issue) in issues.iter().enumerate() {
                    if index > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{issue}")?;
                }
                Ok(())
            }
            Self::InvalidAction { step, action } => {
                write!(f, "action `{action}` is not allowed on step {step}")
            }
            Self::AlreadySubmitted => write!(f, "nomination already submitted"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for WizardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for WizardError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Input collected so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NominationDraft {
    pub nominee_id: String,
    pub nominee_name: String,
    pub category_id: Option<CategoryId>,
    pub justification: String,
    /// Deduplicated by name, in attach order.
    pub supporting_documents: Vec<DocumentRef>,
}

impl NominationDraft {
    fn attach(&mut self, documents: Vec<DocumentRef>) {
        for document in documents {
            if !self
                .supporting_documents
                .iter()
                .any(|existing| existing.name == document.name)
            {
                self.supporting_documents.push(document);
            }
        }
    }

    fn detach(&mut self, name: &str) {
        self.supporting_documents
            .retain(|document| document.name != name);
    }
}

/// User intent delivered to the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardAction {
    SetNomineeId(String),
    SetNomineeName(String),
    SelectCategory(CategoryId),
    ClearCategory,
    SetJustification(String),
    AttachDocuments(Vec<DocumentRef>),
    DetachDocument(String),
    Next,
    Previous,
    Submit,
}

impl WizardAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetNomineeId(_) => "set_nominee_id",
            Self::SetNomineeName(_) => "set_nominee_name",
            Self::SelectCategory(_) => "select_category",
            Self::ClearCategory => "clear_category",
            Self::SetJustification(_) => "set_justification",
            Self::AttachDocuments(_) => "attach_documents",
            Self::DetachDocument(_) => "detach_document",
            Self::Next => "next",
            Self::Previous => "previous",
            Self::Submit => "submit",
        }
    }
}

/// Read-only recap shown on the review step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NominationReview {
    pub nominee_id: String,
    pub nominee_name: String,
    pub category_id: Option<CategoryId>,
    /// Award title of the selected category while it is still Active.
    pub award_title: Option<String>,
    pub justification: String,
    pub supporting_documents: Vec<DocumentRef>,
}

/// Linear nomination wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NominationWizard {
    step: WizardStep,
    draft: NominationDraft,
    submitted: Option<Nomination>,
}

impl Default for NominationWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl NominationWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::NomineeInfo,
            draft: NominationDraft::default(),
            submitted: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &NominationDraft {
        &self.draft
    }

    /// Nomination created by a successful submit.
    pub fn submitted(&self) -> Option<&Nomination> {
        self.submitted.as_ref()
    }

    /// Reference id issued by the store on submit.
    pub fn reference_id(&self) -> Option<&ReferenceId> {
        self.submitted.as_ref().map(|nomination| &nomination.reference_id)
    }

    /// Rounded `step / 3` percentage: 33, 67, 100.
    pub fn progress_percent(&self) -> u8 {
        let ratio = f64::from(self.step.number()) / f64::from(WIZARD_TOTAL_STEPS);
        (ratio * 100.0).round() as u8
    }

    /// Clears the draft and returns to step 1. Allowed from any state.
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    /// Applies one action and returns the resulting step.
    ///
    /// # Errors
    /// - `Validation` when `Next`/`Submit` guards fail (state unchanged).
    /// - `InvalidAction` for `Next` on the review step or `Submit` before it.
    /// - `AlreadySubmitted` for any action after a successful submit.
    /// - `Store` when the store refuses the nomination.
    pub fn apply<C, N>(
        &mut self,
        action: WizardAction,
        store: &mut AwardsStore<C, N>,
    ) -> Result<WizardStep, WizardError>
    where
        C: CategoryRepository,
        N: NominationRepository,
    {
        if self.step.is_terminal() {
            return Err(WizardError::AlreadySubmitted);
        }

        match action {
            WizardAction::SetNomineeId(value) => self.draft.nominee_id = value,
            WizardAction::SetNomineeName(value) => self.draft.nominee_name = value,
            WizardAction::SelectCategory(id) => self.draft.category_id = Some(id),
            WizardAction::ClearCategory => self.draft.category_id = None,
            WizardAction::SetJustification(value) => self.draft.justification = value,
            WizardAction::AttachDocuments(documents) => self.draft.attach(documents),
            WizardAction::DetachDocument(name) => self.draft.detach(&name),
            WizardAction::Next => return self.next(store),
            WizardAction::Previous => self.step = self.step.back(),
            WizardAction::Submit => return self.submit(store),
        }
        Ok(self.step)
    }

    /// Recap of the first two steps for the review screen.
    pub fn review<C, N>(&self, store: &AwardsStore<C, N>) -> NominationReview
    where
        C: CategoryRepository,
        N: NominationRepository,
    {
        let award_title = self
            .draft
            .category_id
            .as_deref()
            .and_then(|id| store.active_category(id))
            .map(|category| category.award_title.clone());

        NominationReview {
            nominee_id: self.draft.nominee_id.clone(),
            nominee_name: self.draft.nominee_name.clone(),
            category_id: self.draft.category_id.clone(),
            award_title,
            justification: self.draft.justification.clone(),
            supporting_documents: self.draft.supporting_documents.clone(),
        }
    }

    fn next<C, N>(&mut self, store: &AwardsStore<C, N>) -> Result<WizardStep, WizardError>
    where
        C: CategoryRepository,
        N: NominationRepository,
    {
        let Some(forward) = self.step.forward() else {
            return Err(WizardError::InvalidAction {
                step: self.step,
                action: WizardAction::Next.name(),
            });
        };

        let issues = validate_step(self.step, &self.draft, store);
        if !issues.is_empty() {
            return Err(self.rejected(issues));
        }

        self.step = forward;
        Ok(self.step)
    }

    fn submit<C, N>(&mut self, store: &mut AwardsStore<C, N>) -> Result<WizardStep, WizardError>
    where
        C: CategoryRepository,
        N: NominationRepository,
    {
        if self.step != WizardStep::ReviewAndSubmit {
            return Err(WizardError::InvalidAction {
                step: self.step,
                action: WizardAction::Submit.name(),
            });
        }

        // Fields stay editable on the review step and the category may have
        // been deactivated since step 2.
        let mut issues = validate_step(WizardStep::NomineeInfo, &self.draft, store);
        issues.extend(validate_step(
            WizardStep::CategoryAndJustification,
            &self.draft,
            store,
        ));
        if !issues.is_empty() {
            return Err(self.rejected(issues));
        }

        let (category_id, award_title) = match self
            .draft
            .category_id
            .as_deref()
            .and_then(|id| store.active_category(id))
        {
            Some(category) => (category.id.clone(), category.award_title.clone()),
            None => {
                return Err(self.rejected(vec![FieldIssue::Blank(WizardField::CategoryId)]));
            }
        };

        let nominated_by = store
            .current_user()
            .map(|user| user.name.trim())
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_NOMINATOR)
            .to_string();

        let nomination = store
            .add_nomination(NewNomination {
                nominee_id: self.draft.nominee_id.clone(),
                nominee_name: self.draft.nominee_name.clone(),
                category_id,
                category_name: award_title,
                justification: self.draft.justification.clone(),
                nominated_by,
                supporting_documents: self.draft.supporting_documents.clone(),
                status: None,
            })
            .map_err(|err| {
                warn!(
                    "event=wizard_submit module=wizard status=error step={}",
                    self.step
                );
                WizardError::Store(err)
            })?;

        info!(
            "event=wizard_submit module=wizard status=ok reference_id={} documents={}",
            nomination.reference_id,
            nomination.supporting_documents.len()
        );
        self.submitted = Some(nomination);
        self.step = WizardStep::Submitted;
        Ok(self.step)
    }

    fn rejected(&self, issues: Vec<FieldIssue>) -> WizardError {
        let fields: Vec<&str> = issues.iter().map(|issue| issue.field().as_str()).collect();
        info!(
            "event=wizard_validation module=wizard status=rejected step={} fields={}",
            self.step,
            fields.join(",")
        );
        WizardError::Validation {
            step: self.step,
            issues,
        }
    }
}

/// Runs the guard for `step` against `draft`.
///
/// Returns every failing field; an empty list means the step may advance.
/// Review and terminal steps have no inputs and always pass.
pub fn validate_step<C, N>(
    step: WizardStep,
    draft: &NominationDraft,
    store: &AwardsStore<C, N>,
) -> Vec<FieldIssue>
where
    C: CategoryRepository,
    N: NominationRepository,
{
    let mut issues = Vec::new();
    match step {
        WizardStep::NomineeInfo => {
            if draft.nominee_id.trim().is_empty() {
                issues.push(FieldIssue::Blank(WizardField::NomineeId));
            }
            if draft.nominee_name.trim().is_empty() {
                issues.push(FieldIssue::Blank(WizardField::NomineeName));
            }
        }
        WizardStep::CategoryAndJustification => {
            match draft.category_id.as_deref() {
                None | Some("") => issues.push(FieldIssue::Blank(WizardField::CategoryId)),
                Some(id) if store.active_category(id).is_none() => {
                    issues.push(FieldIssue::CategoryNotActive(id.to_string()));
                }
                Some(_) => {}
            }
            if draft.justification.trim().is_empty() {
                issues.push(FieldIssue::Blank(WizardField::Justification));
            }
        }
        WizardStep::ReviewAndSubmit | WizardStep::Submitted => {}
    }
    issues
}
