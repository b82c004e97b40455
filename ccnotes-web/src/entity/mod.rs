//! Entities managed through the admin screens
//!
//! [`Managed`] describes everything the generic form workflow and listing
//! presenter need to know about one entity type: its route, the raw form
//! input, validation, form layout, and listing columns.

mod note;
mod series;
mod speaker;

pub use note::NoteInput;
pub use series::SeriesInput;
pub use speaker::SpeakerInput;

use serde::de::DeserializeOwned;

use crate::db::{ListOrder, Record};
use crate::form::{FieldErrors, FieldSpec};
use crate::relations::Relation;

pub trait Managed: Record {
    /// Raw submitted form values, kept verbatim for redisplay
    type Input: Clone + Default + Send + Sync + DeserializeOwned + 'static;

    /// Route prefix, e.g. "/Note"
    const PATH: &'static str;

    /// Singular display name
    const LABEL: &'static str;

    /// Plural display name for listing pages
    const PLURAL: &'static str;

    /// Listing column headers, excluding actions
    const HEADERS: &'static [&'static str];

    /// Row order of the listing page
    const LISTING_ORDER: ListOrder = ListOrder::Id;

    /// Seed form input from a stored record
    fn to_input(&self) -> Self::Input;

    /// Validate and normalize raw input into storable fields
    fn validate(input: &Self::Input) -> Result<Self::Fields, FieldErrors>;

    /// Foreign keys that must exist before the fields are stored
    fn references(_fields: &Self::Fields) -> Vec<(Relation, i64)> {
        Vec::new()
    }

    /// Form controls in display order, seeded from `input`
    fn layout(input: &Self::Input) -> Vec<FieldSpec>;

    /// Listing cells matching `HEADERS`
    fn cells(&self) -> Vec<String>;
}
