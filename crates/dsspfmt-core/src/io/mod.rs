//! Output formats and the annotation-document transport.

pub mod document;
pub mod dssp;
pub mod fields;
pub mod traits;
