use ccnotes_common::db::{Speaker, SpeakerFields};
use serde::Deserialize;

use super::Managed;
use crate::form::{validate, FieldErrors, FieldSpec};

/// Submitted speaker form
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpeakerInput {
    pub name: String,
}

impl Managed for Speaker {
    type Input = SpeakerInput;

    const PATH: &'static str = "/Speaker";
    const LABEL: &'static str = "Speaker";
    const PLURAL: &'static str = "Speakers";
    const HEADERS: &'static [&'static str] = &["Speaker Id", "Speaker Name"];

    fn to_input(&self) -> SpeakerInput {
        SpeakerInput {
            name: self.name.clone(),
        }
    }

    fn validate(input: &SpeakerInput) -> Result<SpeakerFields, FieldErrors> {
        let mut errors = FieldErrors::default();
        let name = validate::required(&mut errors, "name", "Speaker Name", &input.name);
        errors.into_result(SpeakerFields { name })
    }

    fn layout(input: &SpeakerInput) -> Vec<FieldSpec> {
        vec![FieldSpec::text("name", "Speaker Name", &input.name)]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_rejected() {
        let errors = Speaker::validate(&SpeakerInput { name: "  ".to_string() }).unwrap_err();
        assert_eq!(errors.get("name"), Some("The Speaker Name field is required."));
    }

    #[test]
    fn test_name_trimmed() {
        let fields = Speaker::validate(&SpeakerInput { name: " Ann Lee ".to_string() }).unwrap();
        assert_eq!(fields.name, "Ann Lee");
    }
}
