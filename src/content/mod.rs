//! Content module - nodes, fields and taxonomy from the CMS

mod fields;
mod node;
mod store;
mod taxonomy;

pub use fields::{field_items, nu, nv};
pub use node::{FieldType, Node, Term, Vocabulary, UNDEFINED_LANGUAGE};
pub use store::{ContentError, ContentStore, MemoryStore};
pub use taxonomy::{tax_options, tax_options_by_name, vocabulary_id};
