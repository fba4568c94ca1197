//! Record files
//!
//! Resume records are stored as TOML or JSON. Every field is optional in
//! both formats; anything left out reads as an empty string or empty list.

use std::fs;
use std::path::Path;

use cvdok_ast::{EducationEntry, ExperienceEntry, ResumeRecord};
use thiserror::Error;

/// Errors that can occur while reading or writing a record file
#[derive(Error, Debug)]
pub enum RecordError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed TOML
    #[error("Invalid TOML record: {0}")]
    Toml(#[from] toml::de::Error),

    /// Record could not be written as TOML
    #[error("Failed to serialize record: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Malformed JSON
    #[error("Invalid JSON record: {0}")]
    Json(#[from] serde_json::Error),

    /// File extension is neither `.toml` nor `.json`
    #[error("Unsupported record format: {0} (expected .toml or .json)")]
    UnsupportedFormat(String),
}

/// Result type for record operations
pub type Result<T> = std::result::Result<T, RecordError>;

/// On-disk record formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Toml,
    Json,
}

impl RecordFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "toml" => Ok(RecordFormat::Toml),
            "json" => Ok(RecordFormat::Json),
            _ => Err(RecordError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Load a record from a `.toml` or `.json` file
pub fn load_record(path: &Path) -> Result<ResumeRecord> {
    let format = RecordFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;

    match format {
        RecordFormat::Toml => from_toml_str(&content),
        RecordFormat::Json => from_json_str(&content),
    }
}

/// Parse a record from TOML text
pub fn from_toml_str(content: &str) -> Result<ResumeRecord> {
    Ok(trim_text_areas(toml::from_str(content)?))
}

/// Parse a record from JSON text
pub fn from_json_str(content: &str) -> Result<ResumeRecord> {
    Ok(trim_text_areas(serde_json::from_str(content)?))
}

/// Strip surrounding whitespace from the multi-line fields
///
/// Summary, skills, descriptions and education details are free text areas;
/// a TOML `"""` block otherwise carries its trailing newline into the flow.
/// Single-line fields are kept as written.
fn trim_text_areas(mut record: ResumeRecord) -> ResumeRecord {
    trim_in_place(&mut record.summary);
    trim_in_place(&mut record.skills);
    for entry in &mut record.experiences {
        trim_in_place(&mut entry.description);
    }
    for entry in &mut record.education {
        trim_in_place(&mut entry.details);
    }
    record
}

fn trim_in_place(text: &mut String) {
    let trimmed = text.trim();
    if trimmed.len() != text.len() {
        *text = trimmed.to_string();
    }
}

/// Serialize a record as TOML
pub fn to_toml_string(record: &ResumeRecord) -> Result<String> {
    Ok(toml::to_string_pretty(record)?)
}

/// A filled-in record used as a starting point by `cvdok init`
pub fn sample_record() -> ResumeRecord {
    let mut record = ResumeRecord {
        full_name: "Ana Silva".to_string(),
        email: "ana.silva@example.com".to_string(),
        phone: "+55 11 91234-5678".to_string(),
        linkedin: "linkedin.com/in/anasilva".to_string(),
        summary: "Data engineer with six years of experience building reliable \
                  pipelines and analytics platforms."
            .to_string(),
        skills: "Python, SQL, Rust\nApache Spark, Airflow".to_string(),
        ..Default::default()
    };

    record.add_experience(ExperienceEntry {
        title: "Senior Data Engineer".to_string(),
        company: "Acme Analytics".to_string(),
        location: "São Paulo, SP".to_string(),
        start_date: "Mar 2021".to_string(),
        end_date: "Present".to_string(),
        description: "Owns the ingestion platform for the finance team.\n\
                      - Cut nightly batch time from 4h to 40min\n\
                      - Migrated 120 jobs from cron to Airflow"
            .to_string(),
    });

    record.add_education(EducationEntry {
        program: "Computer Science".to_string(),
        institution: "Universidade de São Paulo".to_string(),
        location: "São Paulo, SP".to_string(),
        completion_date: "2018".to_string(),
        details: "Thesis on incremental query evaluation.".to_string(),
    });

    record
}
