//! Renderer abstraction
//!
//! A renderer turns a content flow plus page geometry into the bytes of a
//! finished document. The export step only talks to this trait, so the
//! Typst backend can be swapped for another backend or a test double.

use std::path::PathBuf;

use cvdok_ast::{ContentFlow, PageGeometry};

use crate::compiler::Compiler;
use crate::error::Result;
use crate::style::StyleSheet;
use crate::transpiler::Transpiler;

/// Produces a paginated document from a content flow
pub trait Renderer {
    /// Short name used in log messages
    fn name(&self) -> &str;

    /// Render the flow onto pages of the given geometry
    fn render(&self, flow: &ContentFlow, geometry: &PageGeometry) -> Result<Vec<u8>>;
}

/// PDF renderer backed by Typst
#[derive(Debug, Clone, Default)]
pub struct TypstRenderer {
    transpiler: Transpiler,
    font_paths: Vec<PathBuf>,
}

impl TypstRenderer {
    /// Create a renderer with the default style sheet and no extra fonts
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom style sheet
    pub fn with_styles(mut self, styles: StyleSheet) -> Self {
        self.transpiler = Transpiler::with_styles(styles);
        self
    }

    /// Make additional font files available to the typesetter
    pub fn with_fonts(mut self, font_paths: Vec<PathBuf>) -> Self {
        self.font_paths = font_paths;
        self
    }

    /// Typst markup the flow compiles from
    pub fn markup(&self, flow: &ContentFlow, geometry: &PageGeometry) -> String {
        self.transpiler.transpile(flow, geometry)
    }
}

impl Renderer for TypstRenderer {
    fn name(&self) -> &str {
        "typst"
    }

    fn render(&self, flow: &ContentFlow, geometry: &PageGeometry) -> Result<Vec<u8>> {
        let markup = self.markup(flow, geometry);
        log::debug!("Compiling {} bytes of Typst markup", markup.len());
        Compiler::compile_with_fonts(&markup, &self.font_paths)
    }
}
