//! cvdok-core - Resume assembly
//!
//! Core library for cvdok, turning a resume record into an ordered flow of
//! semantic blocks.
//!
//! # Example
//!
//! ```
//! use cvdok_ast::{Block, ResumeRecord};
//! use cvdok_core::assemble;
//!
//! let record = ResumeRecord {
//!     full_name: "Ana Silva".to_string(),
//!     skills: "SQL, Python".to_string(),
//!     ..Default::default()
//! };
//!
//! let flow = assemble(&record);
//! assert_eq!(flow.headings(), vec!["ANA SILVA", "HABILIDADES"]);
//! assert!(flow.iter().any(|b| *b == Block::Bullet("Python".to_string())));
//! ```

pub mod assembler;
pub mod labels;
pub mod loader;

// Re-export main types and functions
pub use assembler::{
    assemble, date_range, join_present, parse_description, tokenize_skills, Assembler,
    AssemblerConfig, META_SEPARATOR, SECTION_GAP,
};
pub use labels::{LabelOverrides, Locale, SectionLabels};
pub use loader::{load_record, RecordError, RecordFormat};

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
