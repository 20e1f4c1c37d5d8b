use crate::models::annotation::StructureAnnotation;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Defines the interface for serializing a structure annotation into one
/// output format.
///
/// This trait provides a common API for the rendering backends. Implementors
/// handle format-specific layout and record production; each drives the
/// residue stream exactly once and writes nothing on failure.
pub trait AnnotationFormat {
    /// The error type for rendering operations.
    type Error: Error + From<io::Error>;

    /// Renders the annotation into a writer.
    ///
    /// # Arguments
    ///
    /// * `annotation` - The classified structure annotation to render.
    /// * `writer` - The writer to output to.
    ///
    /// # Errors
    ///
    /// Returns an error if a value cannot be represented in the format or if
    /// I/O operations encounter issues. No bytes are written in that case.
    fn write_to(
        annotation: &StructureAnnotation,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error>;

    /// Renders the annotation into a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or rendering fails.
    fn write_to_path<P: AsRef<Path>>(
        annotation: &StructureAnnotation,
        path: P,
    ) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(annotation, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
