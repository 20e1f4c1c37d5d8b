//! # dsspfmt Core Library
//!
//! A library for projecting an already-classified per-residue secondary-structure
//! annotation of a biomolecular model into its two durable textual forms: the
//! classic fixed-column DSSP report and a set of mmCIF conformation records.
//!
//! ## Architectural Philosophy
//!
//! The crate is deliberately a pure rendering layer. Structure loading, hydrogen-bond
//! detection, ladder/sheet assignment, and accessibility computation all live in an
//! external classification engine; this crate consumes the engine's immutable output
//! in a single forward pass per format and is responsible only for its faithful,
//! deterministic projection.
//!
//! - **[`models`]: The Data.** Immutable residue annotations, the aggregate
//!   statistics summary, and the structure/provenance metadata bundle.
//!
//! - **[`io`]: The Legacy Report.** Fixed-width field formatting and the
//!   byte-exact classic DSSP report writer, plus the TOML annotation-document
//!   loader that carries the engine's output between processes.
//!
//! - **[`records`]: The Structured Annotation.** A generic structured-record
//!   sink and the conformation-segment annotator that run-length encodes the
//!   residue stream into `struct_conf` / `struct_conf_type` records.

pub mod io;
pub mod models;
pub mod records;
