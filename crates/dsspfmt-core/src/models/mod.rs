//! Immutable data model for a classified residue stream and its summary data.

pub mod annotation;
pub mod residue;
pub mod statistics;
