//! Add/edit form workflow
//!
//! A form moves from `Empty` (new) or `Prefilled` (edit) to a submission. A
//! valid submission is written exactly once and redirects to the listing; an
//! invalid one is re-rendered as `Invalid` with the user's own input, verbatim,
//! and per-field messages. Nothing is written on failure.

pub mod validate;

pub use validate::{FieldError, FieldErrors};

use ccnotes_common::time::{format_date, today};
use ccnotes_common::{Error, Result};
use tracing::info;

use crate::db::RecordStore;
use crate::entity::Managed;
use crate::relations::{Relation, RelationResolver};

/// Kind of input control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// HTML body edited with a rich-text widget
    RichText,
    Date,
    Select(Relation),
}

/// One form control as declared by an entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub value: String,
}

impl FieldSpec {
    pub fn text(name: &'static str, label: &'static str, value: &str) -> Self {
        Self::new(name, label, FieldKind::Text, value)
    }

    pub fn rich_text(name: &'static str, label: &'static str, value: &str) -> Self {
        Self::new(name, label, FieldKind::RichText, value)
    }

    pub fn date(name: &'static str, label: &'static str, value: &str) -> Self {
        Self::new(name, label, FieldKind::Date, value)
    }

    pub fn select(relation: Relation, label: &'static str, value: &str) -> Self {
        Self::new(relation.field(), label, FieldKind::Select(relation), value)
    }

    fn new(name: &'static str, label: &'static str, kind: FieldKind, value: &str) -> Self {
        Self {
            name,
            label,
            kind,
            value: value.to_string(),
        }
    }
}

/// Whether the form creates or edits a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    New,
    Edit(i64),
}

/// Where the form is in its workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// New form, nothing entered
    Empty,
    /// Edit form seeded from the stored record
    Prefilled,
    /// Submitted input failed validation
    Invalid,
}

/// One entry of a selection control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub id: i64,
    pub label: String,
    pub selected: bool,
}

/// Rendering details of a control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    Text,
    RichText,
    Date { placeholder: String },
    Select { prompt: String, options: Vec<SelectOption> },
}

/// A control ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
    pub error: Option<String>,
    pub control: Control,
}

/// A form ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub entity: &'static str,
    pub mode: FormMode,
    pub state: FormState,
    /// URL the form posts to
    pub action: String,
    /// Listing URL for the cancel link
    pub listing: &'static str,
    pub fields: Vec<FieldView>,
    pub errors: FieldErrors,
}

impl FormView {
    pub fn field(&self, name: &str) -> Option<&FieldView> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Result of a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved { id: i64, redirect: String },
    Invalid(FormView),
}

/// Create/edit orchestration for one entity type
pub struct FormWorkflow<T> {
    store: RecordStore<T>,
    relations: RelationResolver,
}

impl<T: Managed> FormWorkflow<T> {
    pub fn new(store: RecordStore<T>, relations: RelationResolver) -> Self {
        Self { store, relations }
    }

    pub async fn render_new(&self) -> Result<FormView> {
        self.build(
            FormMode::New,
            FormState::Empty,
            &T::Input::default(),
            FieldErrors::default(),
        )
        .await
    }

    /// Edit form seeded from the stored record, or `NotFound`
    pub async fn render_edit(&self, id: i64) -> Result<FormView> {
        let record = self.store.get(id).await?;
        self.build(
            FormMode::Edit(id),
            FormState::Prefilled,
            &record.to_input(),
            FieldErrors::default(),
        )
        .await
    }

    pub async fn submit(&self, mode: FormMode, input: T::Input) -> Result<SubmitOutcome> {
        if let FormMode::Edit(id) = mode {
            if !self.store.exists(id).await? {
                return Err(Error::not_found(T::KIND, id));
            }
        }

        let fields = match T::validate(&input) {
            Ok(fields) => fields,
            Err(errors) => return self.reject(mode, &input, errors).await,
        };

        let missing = self
            .relations
            .missing_references(&T::references(&fields))
            .await?;
        if !missing.is_empty() {
            let mut errors = FieldErrors::default();
            for relation in missing {
                errors.add(
                    relation.field(),
                    format!("The selected {} does not exist.", relation.noun()),
                );
            }
            return self.reject(mode, &input, errors).await;
        }

        let id = match mode {
            FormMode::New => self.store.create(&fields).await?,
            FormMode::Edit(id) => {
                self.store.update(id, &fields).await?;
                id
            }
        };

        Ok(SubmitOutcome::Saved {
            id,
            redirect: T::PATH.to_string(),
        })
    }

    async fn reject(
        &self,
        mode: FormMode,
        input: &T::Input,
        errors: FieldErrors,
    ) -> Result<SubmitOutcome> {
        info!(
            "Rejected {} submission with {} field error(s)",
            T::KIND,
            errors.len()
        );
        let view = self.build(mode, FormState::Invalid, input, errors).await?;
        Ok(SubmitOutcome::Invalid(view))
    }

    async fn build(
        &self,
        mode: FormMode,
        state: FormState,
        input: &T::Input,
        errors: FieldErrors,
    ) -> Result<FormView> {
        let mut fields = Vec::new();
        for spec in T::layout(input) {
            let control = match spec.kind {
                FieldKind::Text => Control::Text,
                FieldKind::RichText => Control::RichText,
                FieldKind::Date => Control::Date {
                    placeholder: format_date(today()),
                },
                FieldKind::Select(relation) => {
                    let selected = spec.value.trim();
                    let options = self
                        .relations
                        .choices(relation)
                        .await?
                        .into_iter()
                        .map(|(id, label)| SelectOption {
                            selected: id.to_string() == selected,
                            id,
                            label,
                        })
                        .collect();
                    Control::Select {
                        prompt: format!("select {}", relation.noun()),
                        options,
                    }
                }
            };

            fields.push(FieldView {
                name: spec.name,
                label: spec.label,
                error: errors.get(spec.name).map(str::to_string),
                value: spec.value,
                control,
            });
        }

        let action = match mode {
            FormMode::New => format!("{}/add", T::PATH),
            FormMode::Edit(id) => format!("{}/edit/{}", T::PATH, id),
        };

        Ok(FormView {
            entity: T::LABEL,
            mode,
            state,
            action,
            listing: T::PATH,
            fields,
            errors,
        })
    }
}
