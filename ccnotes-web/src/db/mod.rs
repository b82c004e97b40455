//! Database access layer for ccnotes-web
//!
//! A generic [`RecordStore`] per entity type, driven by the [`Record`]
//! description of each table.

mod records;
mod store;

pub use store::{FieldValue, ListOrder, Record, RecordStore};
