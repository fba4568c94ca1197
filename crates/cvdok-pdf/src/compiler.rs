//! Typst to PDF compiler
//!
//! Compiles Typst markup to PDF bytes using typst-as-lib. The Typst default
//! faces (Libertinus Serif and friends) are always embedded; font files from
//! configuration are added on top of them.

use std::path::Path;

use crate::error::{PdfError, Result};
use typst_as_lib::TypstEngine;

/// Compiler for converting Typst markup to PDF
pub struct Compiler;

impl Compiler {
    /// Compile Typst markup to PDF bytes
    pub fn compile(markup: &str) -> Result<Vec<u8>> {
        Self::compile_with_fonts::<&str>(markup, &[])
    }

    /// Compile with font files loaded from disk
    ///
    /// # Arguments
    /// * `markup` - Typst markup string
    /// * `font_paths` - Extra font files (TTF/OTF) available next to the bundled faces
    pub fn compile_with_fonts<P: AsRef<Path>>(markup: &str, font_paths: &[P]) -> Result<Vec<u8>> {
        let fonts = load_fonts(font_paths)?;

        // `fonts` replaces any earlier list, so every face goes in one call.
        let engine = TypstEngine::builder()
            .main_file(markup.to_string())
            .fonts(fonts)
            .build();
        let compiled = engine.compile();

        for warning in &compiled.warnings {
            log::warn!("Typst warning: {}", warning.message);
        }

        let document = compiled
            .output
            .map_err(|e| PdfError::Compilation(format!("{:?}", e)))?;

        let options = typst_pdf::PdfOptions::default();
        let pdf_bytes = typst_pdf::pdf(&document, &options)
            .map_err(|e| PdfError::Compilation(format!("PDF generation failed: {:?}", e)))?;

        Ok(pdf_bytes.into())
    }
}

/// Bundled faces followed by the configured font files
fn load_fonts<P: AsRef<Path>>(font_paths: &[P]) -> Result<Vec<Vec<u8>>> {
    let mut fonts: Vec<Vec<u8>> = typst_assets::fonts().map(<[u8]>::to_vec).collect();

    for font_path in font_paths {
        let font_path = font_path.as_ref();
        let font_bytes = std::fs::read(font_path).map_err(|e| {
            PdfError::Font(format!("Failed to read font {}: {}", font_path.display(), e))
        })?;
        log::debug!("Loaded font {}", font_path.display());
        fonts.push(font_bytes);
    }

    Ok(fonts)
}
