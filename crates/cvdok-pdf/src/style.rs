//! Paragraph styles and block roles
//!
//! A [`Block`] only says what a piece of text is; the style sheet decides
//! how it looks. Two variants are styled by position: a `Heading` is the
//! candidate name unless a `Rule` follows it, and a `MetaLine` is the
//! contact line until the first section title has been seen.

use cvdok_ast::{Block, ContentFlow};

/// Horizontal alignment of a paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// Typographic settings for one kind of text block, in points
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphStyle {
    pub size: f32,
    pub leading: f32,
    pub bold: bool,
    pub italic: bool,
    pub align: Align,
    pub space_before: f32,
    pub space_after: f32,
    pub left_indent: f32,
}

impl ParagraphStyle {
    fn body(size: f32, leading: f32) -> Self {
        Self {
            size,
            leading,
            bold: false,
            italic: false,
            align: Align::Left,
            space_before: 0.0,
            space_after: 0.0,
            left_indent: 0.0,
        }
    }
}

/// Horizontal rule settings
#[derive(Debug, Clone, PartialEq)]
pub struct RuleStyle {
    pub thickness: f32,
    /// Grey level, 0 (black) to 255 (white)
    pub luma: u8,
    pub space_before: f32,
    pub space_after: f32,
}

/// Visual role a block is rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Name,
    Contact,
    SectionTitle,
    EntryTitle,
    Details,
    Body,
    Bullet,
    Rule,
    Space,
}

/// Styles for every text role
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSheet {
    pub name: ParagraphStyle,
    pub contact: ParagraphStyle,
    pub section_title: ParagraphStyle,
    pub entry_title: ParagraphStyle,
    pub details: ParagraphStyle,
    pub body: ParagraphStyle,
    pub bullet: ParagraphStyle,
    pub rule: RuleStyle,
    pub bullet_marker: String,
}

impl StyleSheet {
    /// Style for a text role; `None` for rules and spacers
    pub fn paragraph(&self, role: Role) -> Option<&ParagraphStyle> {
        match role {
            Role::Name => Some(&self.name),
            Role::Contact => Some(&self.contact),
            Role::SectionTitle => Some(&self.section_title),
            Role::EntryTitle => Some(&self.entry_title),
            Role::Details => Some(&self.details),
            Role::Body => Some(&self.body),
            Role::Bullet => Some(&self.bullet),
            Role::Rule | Role::Space => None,
        }
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            name: ParagraphStyle {
                bold: true,
                align: Align::Center,
                space_after: 6.0,
                ..ParagraphStyle::body(18.0, 22.0)
            },
            contact: ParagraphStyle {
                align: Align::Center,
                space_after: 12.0,
                ..ParagraphStyle::body(10.0, 12.0)
            },
            section_title: ParagraphStyle {
                bold: true,
                space_before: 12.0,
                space_after: 6.0,
                ..ParagraphStyle::body(14.0, 18.0)
            },
            entry_title: ParagraphStyle {
                bold: true,
                space_after: 2.0,
                ..ParagraphStyle::body(11.0, 14.0)
            },
            details: ParagraphStyle {
                italic: true,
                space_after: 2.0,
                ..ParagraphStyle::body(10.0, 12.0)
            },
            body: ParagraphStyle {
                left_indent: 18.0,
                space_after: 6.0,
                ..ParagraphStyle::body(10.0, 12.0)
            },
            bullet: ParagraphStyle {
                left_indent: 20.0,
                space_after: 2.0,
                ..ParagraphStyle::body(10.0, 12.0)
            },
            rule: RuleStyle {
                thickness: 0.5,
                luma: 128,
                space_before: 1.0,
                space_after: 1.0,
            },
            bullet_marker: "•".to_string(),
        }
    }
}

/// Resolve the visual role of every block in the flow
pub fn resolve_roles(flow: &ContentFlow) -> Vec<Role> {
    let blocks = flow.blocks();
    let mut in_identity = true;

    blocks
        .iter()
        .enumerate()
        .map(|(i, block)| match block {
            Block::Heading(_) => {
                if matches!(blocks.get(i + 1), Some(Block::Rule)) {
                    in_identity = false;
                    Role::SectionTitle
                } else {
                    Role::Name
                }
            }
            Block::MetaLine(_) if in_identity => Role::Contact,
            Block::MetaLine(_) => Role::Details,
            Block::SubHeading(_) => Role::EntryTitle,
            Block::Paragraph(_) => Role::Body,
            Block::Bullet(_) => Role::Bullet,
            Block::Rule => Role::Rule,
            Block::Space(_) => Role::Space,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> String {
        s.to_string()
    }

    #[test]
    fn test_identity_roles() {
        let flow = ContentFlow::from(vec![
            Block::Heading(text("ANA")),
            Block::MetaLine(text("ana@x.com")),
            Block::Space(7.2),
        ]);
        assert_eq!(
            resolve_roles(&flow),
            vec![Role::Name, Role::Contact, Role::Space]
        );
    }

    #[test]
    fn test_section_roles() {
        let flow = ContentFlow::from(vec![
            Block::Space(7.2),
            Block::Heading(text("EXPERIENCE")),
            Block::Rule,
            Block::SubHeading(text("ENGINEER")),
            Block::MetaLine(text("Acme")),
            Block::Bullet(text("Shipped")),
            Block::Paragraph(text("Also")),
        ]);
        assert_eq!(
            resolve_roles(&flow),
            vec![
                Role::Space,
                Role::SectionTitle,
                Role::Rule,
                Role::EntryTitle,
                Role::Details,
                Role::Bullet,
                Role::Body,
            ]
        );
    }

    #[test]
    fn test_default_styles() {
        let styles = StyleSheet::default();
        assert_eq!(styles.name.size, 18.0);
        assert_eq!(styles.name.align, Align::Center);
        assert!(styles.details.italic);
        assert_eq!(styles.bullet.left_indent, 20.0);
        assert!(styles.paragraph(Role::Rule).is_none());
        assert_eq!(styles.paragraph(Role::SectionTitle).map(|s| s.size), Some(14.0));
    }
}
