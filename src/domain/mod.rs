mod document;

pub use document::{DocumentKind, Scheme, ValidDocument, Validation, ValidationError};
