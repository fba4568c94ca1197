//! Export boundary
//!
//! The only place where producing a resume can fail. The record is borrowed
//! immutably, so a failed export leaves it intact for another attempt, and
//! the output is written through a temporary file in the destination
//! directory so the destination only ever holds a complete document.

use std::io::Write;
use std::path::{Path, PathBuf};

use cvdok_ast::{PageGeometry, ResumeRecord};
use cvdok_core::Assembler;
use cvdok_pdf::{PdfError, Renderer};
use thiserror::Error;
use tracing::{debug, info, warn};

/// A failed export attempt
#[derive(Error, Debug)]
pub enum RenderFailure {
    /// The renderer could not produce the document
    #[error("Failed to render document: {0}")]
    Render(#[from] PdfError),

    /// The destination directory does not exist
    #[error("Output directory does not exist: {}", .0.display())]
    MissingDirectory(PathBuf),

    /// The document could not be written to the destination
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Summary of a successful export
#[derive(Debug, Clone, PartialEq)]
pub struct ExportReport {
    /// Where the document was written
    pub path: PathBuf,
    /// Size of the document
    pub bytes: usize,
    /// Number of blocks in the assembled flow
    pub blocks: usize,
    /// Whether the record assembled to nothing but spacing
    pub blank: bool,
}

/// Assemble, render and write a record to `path`
pub fn export(
    record: &ResumeRecord,
    assembler: &Assembler,
    renderer: &dyn Renderer,
    geometry: &PageGeometry,
    path: &Path,
) -> Result<ExportReport, RenderFailure> {
    let flow = assembler.assemble(record);
    debug!("Assembled {} blocks", flow.len());

    let blank = flow.is_blank();
    if blank {
        warn!("Record has no content; exporting a blank page");
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if !dir.is_dir() {
        return Err(RenderFailure::MissingDirectory(dir));
    }

    info!("Rendering with {} backend", renderer.name());
    let bytes = renderer.render(&flow, geometry)?;

    write_atomically(&dir, path, &bytes)?;
    info!("Wrote {} ({} bytes)", path.display(), bytes.len());

    Ok(ExportReport {
        path: path.to_path_buf(),
        bytes: bytes.len(),
        blocks: flow.len(),
        blank,
    })
}

/// Write through a temporary file and rename it over the destination
fn write_atomically(dir: &Path, path: &Path, bytes: &[u8]) -> Result<(), RenderFailure> {
    let write_err = |source: std::io::Error| RenderFailure::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(bytes).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvdok_ast::ContentFlow;

    struct FixedRenderer(Vec<u8>);

    impl Renderer for FixedRenderer {
        fn name(&self) -> &str {
            "fixed"
        }

        fn render(&self, _flow: &ContentFlow, _geometry: &PageGeometry) -> cvdok_pdf::Result<Vec<u8>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_export_writes_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.pdf");

        let report = export(
            &ResumeRecord::default(),
            &Assembler::new(),
            &FixedRenderer(b"%PDF-fake".to_vec()),
            &PageGeometry::letter(),
            &path,
        )
        .unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-fake");
        assert_eq!(report.bytes, 9);
        assert_eq!(report.blocks, 1);
        assert!(report.blank);
    }

    #[test]
    fn test_export_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("cv.pdf");

        let result = export(
            &ResumeRecord::default(),
            &Assembler::new(),
            &FixedRenderer(Vec::new()),
            &PageGeometry::letter(),
            &path,
        );

        assert!(matches!(result, Err(RenderFailure::MissingDirectory(_))));
    }
}
