//! Structured-record output: the generic record sink and the
//! conformation-segment annotator that fills it.

pub mod conformation;
pub mod sink;
