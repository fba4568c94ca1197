//! cvdok CLI - Command-line interface library
//!
//! This library provides the CLI functionality for cvdok:
//! - Init: Write a sample resume record
//! - Flow: Show the assembled content flow of a record
//! - Render: Export a record to PDF
//!
//! # Binary Usage
//!
//! ```bash
//! # Start from the sample record
//! cvdok init resume.toml
//!
//! # Inspect what will be laid out
//! cvdok flow resume.toml --format json
//!
//! # Produce the PDF
//! cvdok render resume.toml --output resume.pdf --locale en
//! ```

pub mod app;
pub mod config;
pub mod export;

// Re-export main entry point and types
pub use app::{flow_command, format_flow_text, init_command, render_command, run_cli, FlowFormat};
pub use config::Settings;
pub use export::{export, ExportReport, RenderFailure};
