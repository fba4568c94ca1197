//! Resume record definitions
//!
//! A [`ResumeRecord`] is the snapshot of every form field at export time.
//! All fields are plain strings where the empty string means "absent"; there
//! is no `Option` anywhere in the record.

use serde::{Deserialize, Serialize};

/// A complete resume, as collected from the form
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeRecord {
    /// Candidate full name
    pub full_name: String,
    /// Contact e-mail
    pub email: String,
    /// Contact phone
    pub phone: String,
    /// LinkedIn profile (free text, usually a URL)
    pub linkedin: String,
    /// Professional summary
    pub summary: String,
    /// Raw skills text, comma- or newline-separated
    pub skills: String,
    /// Work experience, in output order
    pub experiences: Vec<ExperienceEntry>,
    /// Education, in output order
    pub education: Vec<EducationEntry>,
}

/// One work experience entry
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    /// Job title
    pub title: String,
    /// Employer
    pub company: String,
    /// City / region
    pub location: String,
    /// Start date, free text
    pub start_date: String,
    /// End date, free text
    pub end_date: String,
    /// Multi-line description; lines starting with `-` become bullets
    pub description: String,
}

/// One education entry
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    /// Degree or course name
    pub program: String,
    /// School or university
    pub institution: String,
    /// City / region
    pub location: String,
    /// Completion date, free text
    pub completion_date: String,
    /// Free text, rendered verbatim as one paragraph
    pub details: String,
}

impl ResumeRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an experience entry at the end of the list
    pub fn add_experience(&mut self, entry: ExperienceEntry) {
        self.experiences.push(entry);
    }

    /// Remove the experience entry at `index`
    ///
    /// Returns `None` and leaves the list untouched when `index` is out of
    /// range.
    pub fn remove_experience(&mut self, index: usize) -> Option<ExperienceEntry> {
        if index < self.experiences.len() {
            Some(self.experiences.remove(index))
        } else {
            None
        }
    }

    /// Append an education entry at the end of the list
    pub fn add_education(&mut self, entry: EducationEntry) {
        self.education.push(entry);
    }

    /// Remove the education entry at `index`
    pub fn remove_education(&mut self, index: usize) -> Option<EducationEntry> {
        if index < self.education.len() {
            Some(self.education.remove(index))
        } else {
            None
        }
    }
}

impl ExperienceEntry {
    /// Whether the entry has a title or a company
    ///
    /// Entries without either are left out of the document entirely.
    pub fn is_identified(&self) -> bool {
        !self.title.is_empty() || !self.company.is_empty()
    }
}

impl EducationEntry {
    /// Whether the entry has a program or an institution
    pub fn is_identified(&self) -> bool {
        !self.program.is_empty() || !self.institution.is_empty()
    }
}
