use ccnotes_common::db::{Series, SeriesFields};
use serde::Deserialize;

use super::Managed;
use crate::form::{validate, FieldErrors, FieldSpec};

/// Submitted series form
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SeriesInput {
    pub title: String,
}

impl Managed for Series {
    type Input = SeriesInput;

    const PATH: &'static str = "/Series";
    const LABEL: &'static str = "Series";
    const PLURAL: &'static str = "Series";
    const HEADERS: &'static [&'static str] = &["Series Id", "Series Title"];

    fn to_input(&self) -> SeriesInput {
        SeriesInput {
            title: self.title.clone(),
        }
    }

    fn validate(input: &SeriesInput) -> Result<SeriesFields, FieldErrors> {
        let mut errors = FieldErrors::default();
        let title = validate::required(&mut errors, "title", "Series Title", &input.title);
        errors.into_result(SeriesFields { title })
    }

    fn layout(input: &SeriesInput) -> Vec<FieldSpec> {
        vec![FieldSpec::text("title", "Series Title", &input.title)]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.title.clone()]
    }
}
