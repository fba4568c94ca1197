//! cvdok-pdf - PDF rendering via Typst
//!
//! This crate renders cvdok content flows to PDF using Typst as the
//! typesetting backend.
//!
//! # Architecture
//!
//! The pipeline consists of two stages:
//!
//! 1. **Transpiler** - Converts a `cvdok_ast::ContentFlow` to Typst markup,
//!    resolving each block's visual role against a [`StyleSheet`]
//! 2. **Compiler** - Compiles Typst markup to PDF bytes
//!
//! [`TypstRenderer`] wires both stages behind the [`Renderer`] trait.
//!
//! # Example
//!
//! ```ignore
//! use cvdok_ast::{ContentFlow, PageGeometry};
//! use cvdok_pdf::{Renderer, TypstRenderer};
//!
//! let flow = ContentFlow::new();
//! let pdf_bytes = TypstRenderer::new().render(&flow, &PageGeometry::letter())?;
//! ```

mod compiler;
mod error;
mod renderer;
pub mod style;
mod transpiler;

pub use compiler::Compiler;
pub use error::{PdfError, Result};
pub use renderer::{Renderer, TypstRenderer};
pub use style::{resolve_roles, Align, ParagraphStyle, Role, RuleStyle, StyleSheet};
pub use transpiler::Transpiler;

/// Render a flow to PDF with the default renderer
pub fn render_pdf(
    flow: &cvdok_ast::ContentFlow,
    geometry: &cvdok_ast::PageGeometry,
) -> Result<Vec<u8>> {
    TypstRenderer::new().render(flow, geometry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvdok_ast::{Block, ContentFlow, PageGeometry};

    #[test]
    fn test_render_pdf_draws_text() {
        let flow = ContentFlow::from(vec![Block::Paragraph("Hello world".to_string())]);
        let pdf = render_pdf(&flow, &PageGeometry::letter()).unwrap();

        assert!(pdf.starts_with(b"%PDF"));
        assert!(pdf.windows(9).any(|w| w == b"/BaseFont"));
    }
}
