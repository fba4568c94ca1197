//! cvdok-ast - Resume record and content flow definitions
//!
//! This crate provides the types shared by every stage of cvdok:
//!
//! - [`ResumeRecord`] and its entries, the immutable snapshot of what the
//!   user typed into the form
//! - [`Block`] and [`ContentFlow`], the semantic output of the assembler
//! - [`PageGeometry`], the page size and margins handed to the renderer

pub mod block;
pub mod page;
pub mod record;

pub use block::{Block, ContentFlow};
pub use page::{Margins, PageGeometry, POINTS_PER_INCH};
pub use record::{EducationEntry, ExperienceEntry, ResumeRecord};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }
}
