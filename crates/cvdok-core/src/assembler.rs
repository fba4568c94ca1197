//! Document assembler
//!
//! This module turns a [`ResumeRecord`] into a [`ContentFlow`]. Sections are
//! always visited in the same order: identity, summary, experience,
//! education, skills. A section only appears when it has something to show.
//!
//! # Example
//!
//! ```
//! use cvdok_ast::{Block, ResumeRecord};
//! use cvdok_core::assemble;
//!
//! let record = ResumeRecord {
//!     full_name: "Ana Silva".to_string(),
//!     email: "ana@x.com".to_string(),
//!     ..Default::default()
//! };
//!
//! let flow = assemble(&record);
//! assert_eq!(flow.blocks()[0], Block::Heading("ANA SILVA".to_string()));
//! assert_eq!(flow.blocks()[1], Block::MetaLine("ana@x.com".to_string()));
//! ```

use cvdok_ast::{Block, ContentFlow, EducationEntry, ExperienceEntry, ResumeRecord};

use crate::labels::SectionLabels;

/// Separator between the parts of a contact or details line
pub const META_SEPARATOR: &str = " | ";

/// Vertical gap after the identity block, each section and each entry (0.1 in)
pub const SECTION_GAP: f32 = 7.2;

/// Assembler configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AssemblerConfig {
    /// Section titles
    pub labels: SectionLabels,
    /// Amount of every `Space` block, in points
    pub section_gap: f32,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            labels: SectionLabels::default(),
            section_gap: SECTION_GAP,
        }
    }
}

/// Resume record to content flow assembler
#[derive(Debug, Clone, Default)]
pub struct Assembler {
    config: AssemblerConfig,
}

impl Assembler {
    /// Create an assembler with Portuguese section titles
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an assembler with a custom configuration
    pub fn with_config(config: AssemblerConfig) -> Self {
        Self { config }
    }

    /// Create an assembler with custom section titles
    pub fn with_labels(labels: SectionLabels) -> Self {
        Self::with_config(AssemblerConfig {
            labels,
            ..Default::default()
        })
    }

    /// Current configuration
    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    /// Assemble the content flow for a record
    ///
    /// Never fails: every field is optional and missing content only removes
    /// blocks from the output.
    pub fn assemble(&self, record: &ResumeRecord) -> ContentFlow {
        let mut flow = ContentFlow::new();

        self.push_identity(record, &mut flow);
        self.push_summary(record, &mut flow);
        self.push_experience(&record.experiences, &mut flow);
        self.push_education(&record.education, &mut flow);
        self.push_skills(&record.skills, &mut flow);

        flow
    }

    fn push_identity(&self, record: &ResumeRecord, flow: &mut ContentFlow) {
        if !record.full_name.is_empty() {
            flow.push(Block::Heading(record.full_name.to_uppercase()));
        }

        let contact = join_present(&[
            record.email.as_str(),
            record.phone.as_str(),
            record.linkedin.as_str(),
        ]);
        if !contact.is_empty() {
            flow.push(Block::MetaLine(contact));
        }

        // Always present, even for an empty identity.
        flow.push(self.gap());
    }

    fn push_summary(&self, record: &ResumeRecord, flow: &mut ContentFlow) {
        if record.summary.trim().is_empty() {
            return;
        }

        self.push_section_title(&self.config.labels.summary, flow);
        flow.push(Block::Paragraph(record.summary.clone()));
        flow.push(self.gap());
    }

    fn push_experience(&self, entries: &[ExperienceEntry], flow: &mut ContentFlow) {
        if !entries.iter().any(ExperienceEntry::is_identified) {
            return;
        }

        self.push_section_title(&self.config.labels.experience, flow);

        for entry in entries.iter().filter(|e| e.is_identified()) {
            flow.push(Block::SubHeading(entry.title.to_uppercase()));

            let dates = date_range(&entry.start_date, &entry.end_date).unwrap_or_default();
            let details = join_present(&[
                entry.company.as_str(),
                entry.location.as_str(),
                dates.as_str(),
            ]);
            if !details.is_empty() {
                flow.push(Block::MetaLine(details));
            }

            for block in parse_description(&entry.description) {
                flow.push(block);
            }

            flow.push(self.gap());
        }
    }

    fn push_education(&self, entries: &[EducationEntry], flow: &mut ContentFlow) {
        if !entries.iter().any(EducationEntry::is_identified) {
            return;
        }

        self.push_section_title(&self.config.labels.education, flow);

        for entry in entries.iter().filter(|e| e.is_identified()) {
            flow.push(Block::SubHeading(entry.program.to_uppercase()));

            let details = join_present(&[
                entry.institution.as_str(),
                entry.location.as_str(),
                entry.completion_date.as_str(),
            ]);
            if !details.is_empty() {
                flow.push(Block::MetaLine(details));
            }

            if !entry.details.is_empty() {
                flow.push(Block::Paragraph(entry.details.clone()));
            }

            flow.push(self.gap());
        }
    }

    fn push_skills(&self, skills: &str, flow: &mut ContentFlow) {
        let tokens = tokenize_skills(skills);
        if tokens.is_empty() {
            return;
        }

        self.push_section_title(&self.config.labels.skills, flow);
        for token in tokens {
            flow.push(Block::Bullet(token));
        }
        flow.push(self.gap());
    }

    fn push_section_title(&self, title: &str, flow: &mut ContentFlow) {
        flow.push(Block::Heading(title.to_string()));
        flow.push(Block::Rule);
    }

    fn gap(&self) -> Block {
        Block::Space(self.config.section_gap)
    }
}

/// Assemble a record with the default assembler
pub fn assemble(record: &ResumeRecord) -> ContentFlow {
    Assembler::new().assemble(record)
}

/// Join the non-empty parts with `" | "`
///
/// Returns an empty string when every part is empty.
pub fn join_present(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(META_SEPARATOR)
}

/// Build the `"{start} - {end}"` date range of an experience entry
///
/// Returns `None` when both sides are empty. When only one side is empty the
/// hyphen is kept as is, so `("Jan 2020", "")` gives `"Jan 2020 - "`.
pub fn date_range(start: &str, end: &str) -> Option<String> {
    if start.is_empty() && end.is_empty() {
        None
    } else {
        Some(format!("{} - {}", start, end))
    }
}

/// Split an experience description into bullets and paragraphs
///
/// Each line is trimmed. A line starting with `-` loses that one character,
/// is trimmed again and becomes a bullet; any other non-empty line becomes a
/// paragraph. Blank lines are dropped.
pub fn parse_description(text: &str) -> Vec<Block> {
    text.split('\n')
        .filter_map(|line| {
            let line = line.trim();
            if let Some(rest) = line.strip_prefix('-') {
                Some(Block::Bullet(rest.trim().to_string()))
            } else if !line.is_empty() {
                Some(Block::Paragraph(line.to_string()))
            } else {
                None
            }
        })
        .collect()
}

/// Split raw skills text on commas and newlines
///
/// Tokens are trimmed and empty ones discarded; order is kept.
pub fn tokenize_skills(text: &str) -> Vec<String> {
    text.replace(',', "\n")
        .split('\n')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::Locale;

    fn paragraph(text: &str) -> Block {
        Block::Paragraph(text.to_string())
    }

    fn bullet(text: &str) -> Block {
        Block::Bullet(text.to_string())
    }

    #[test]
    fn test_parse_description_mixed_lines() {
        let blocks = parse_description("- Led a team\nWrote reports\n\n-  Shipped X ");
        assert_eq!(
            blocks,
            vec![bullet("Led a team"), paragraph("Wrote reports"), bullet("Shipped X")]
        );
    }

    #[test]
    fn test_parse_description_strips_one_dash_only() {
        let blocks = parse_description("--double\n- - nested");
        assert_eq!(blocks, vec![bullet("-double"), bullet("- nested")]);
    }

    #[test]
    fn test_parse_description_lone_dash_is_empty_bullet() {
        assert_eq!(parse_description("  -  "), vec![bullet("")]);
    }

    #[test]
    fn test_parse_description_crlf_and_blank() {
        assert_eq!(
            parse_description("first\r\n\r\n- second\r\n"),
            vec![paragraph("first"), bullet("second")]
        );
        assert!(parse_description("").is_empty());
        assert!(parse_description("\n  \n\t\n").is_empty());
    }

    #[test]
    fn test_tokenize_skills() {
        assert_eq!(tokenize_skills("Python, SQL,\nGo"), vec!["Python", "SQL", "Go"]);
        assert_eq!(tokenize_skills(" , ,\n"), Vec::<String>::new());
        assert_eq!(tokenize_skills("Rust"), vec!["Rust"]);
    }

    #[test]
    fn test_date_range() {
        assert_eq!(date_range("", ""), None);
        assert_eq!(date_range("Jan 2020", ""), Some("Jan 2020 - ".to_string()));
        assert_eq!(date_range("", "Dec 2021"), Some(" - Dec 2021".to_string()));
        assert_eq!(
            date_range("Jan 2020", "Dec 2021"),
            Some("Jan 2020 - Dec 2021".to_string())
        );
    }

    #[test]
    fn test_join_present() {
        assert_eq!(join_present(&["a", "", "c"]), "a | c");
        assert_eq!(join_present(&["", ""]), "");
        assert_eq!(join_present(&["only"]), "only");
    }

    #[test]
    fn test_identity_always_ends_with_gap() {
        let flow = assemble(&ResumeRecord::default());
        assert_eq!(flow.blocks(), &[Block::Space(SECTION_GAP)]);
    }

    #[test]
    fn test_contact_order_is_fixed() {
        let record = ResumeRecord {
            linkedin: "linkedin.com/in/ana".to_string(),
            phone: "555-0100".to_string(),
            email: "ana@x.com".to_string(),
            ..Default::default()
        };
        let flow = assemble(&record);
        assert_eq!(
            flow.blocks()[0],
            Block::MetaLine("ana@x.com | 555-0100 | linkedin.com/in/ana".to_string())
        );
    }

    #[test]
    fn test_summary_whitespace_only_is_omitted() {
        let record = ResumeRecord {
            summary: "  \n\t".to_string(),
            ..Default::default()
        };
        assert!(assemble(&record).headings().is_empty());
    }

    #[test]
    fn test_summary_section() {
        let record = ResumeRecord {
            summary: "Data engineer.".to_string(),
            ..Default::default()
        };
        let flow = assemble(&record);
        assert_eq!(
            flow.into_blocks(),
            vec![
                Block::Space(SECTION_GAP),
                Block::Heading("RESUMO PROFISSIONAL".to_string()),
                Block::Rule,
                paragraph("Data engineer."),
                Block::Space(SECTION_GAP),
            ]
        );
    }

    #[test]
    fn test_experience_entry_blocks() {
        let mut record = ResumeRecord::default();
        record.add_experience(ExperienceEntry {
            title: "Data Analyst".to_string(),
            company: "Acme".to_string(),
            location: "São Paulo".to_string(),
            start_date: "Jan 2020".to_string(),
            end_date: String::new(),
            description: "- Built dashboards".to_string(),
        });

        let flow = assemble(&record);
        assert_eq!(
            &flow.blocks()[1..],
            &[
                Block::Heading("EXPERIÊNCIA PROFISSIONAL".to_string()),
                Block::Rule,
                Block::SubHeading("DATA ANALYST".to_string()),
                Block::MetaLine("Acme | São Paulo | Jan 2020 - ".to_string()),
                bullet("Built dashboards"),
                Block::Space(SECTION_GAP),
            ]
        );
    }

    #[test]
    fn test_experience_company_only_has_empty_subheading() {
        let mut record = ResumeRecord::default();
        record.add_experience(ExperienceEntry {
            company: "Acme".to_string(),
            ..Default::default()
        });

        let flow = assemble(&record);
        assert_eq!(flow.blocks()[3], Block::SubHeading(String::new()));
        assert_eq!(flow.blocks()[4], Block::MetaLine("Acme".to_string()));
    }

    #[test]
    fn test_education_details_kept_verbatim() {
        let mut record = ResumeRecord::default();
        record.add_education(EducationEntry {
            program: "Computer Science".to_string(),
            institution: "USP".to_string(),
            location: String::new(),
            completion_date: "2019".to_string(),
            details: "- Thesis on compilers\nGPA 3.9".to_string(),
        });

        let flow = assemble(&record);
        assert_eq!(
            &flow.blocks()[1..],
            &[
                Block::Heading("FORMAÇÃO ACADÊMICA".to_string()),
                Block::Rule,
                Block::SubHeading("COMPUTER SCIENCE".to_string()),
                Block::MetaLine("USP | 2019".to_string()),
                paragraph("- Thesis on compilers\nGPA 3.9"),
                Block::Space(SECTION_GAP),
            ]
        );
    }

    #[test]
    fn test_skills_with_only_separators_is_omitted() {
        let record = ResumeRecord {
            skills: ", ,\n,".to_string(),
            ..Default::default()
        };
        assert!(assemble(&record).is_blank());
    }

    #[test]
    fn test_custom_labels_and_gap() {
        let assembler = Assembler::with_config(AssemblerConfig {
            labels: SectionLabels::for_locale(Locale::En),
            section_gap: 10.0,
        });
        let record = ResumeRecord {
            skills: "Rust".to_string(),
            ..Default::default()
        };

        let flow = assembler.assemble(&record);
        assert_eq!(flow.headings(), vec!["SKILLS"]);
        assert_eq!(flow.blocks().last(), Some(&Block::Space(10.0)));
    }
}
