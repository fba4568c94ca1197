//! Content flow to Typst markup transpiler
//!
//! Converts a cvdok [`ContentFlow`] into Typst markup. Every block becomes
//! one top-level statement; resume text is always emitted as a Typst string
//! literal so characters such as `*`, `#` or `_` typed into a form field are
//! printed as-is instead of being read as markup.

use std::fmt::Write;

use cvdok_ast::{Block, ContentFlow, PageGeometry};

use crate::style::{resolve_roles, Align, ParagraphStyle, Role, RuleStyle, StyleSheet};

/// Width of the bullet marker column, in points
const BULLET_COLUMN: f32 = 10.0;

/// Transpiler for converting a content flow to Typst markup
#[derive(Debug, Clone, Default)]
pub struct Transpiler {
    styles: StyleSheet,
}

impl Transpiler {
    /// Create a transpiler with the default style sheet
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transpiler with custom styles
    pub fn with_styles(styles: StyleSheet) -> Self {
        Self { styles }
    }

    /// Style sheet in use
    pub fn styles(&self) -> &StyleSheet {
        &self.styles
    }

    /// Transpile a flow to a complete Typst document
    pub fn transpile(&self, flow: &ContentFlow, geometry: &PageGeometry) -> String {
        let mut output = String::new();
        let roles = resolve_roles(flow);

        // Document metadata from the candidate name, if any
        let name = flow
            .iter()
            .zip(&roles)
            .find(|(_, role)| **role == Role::Name)
            .and_then(|(block, _)| block.text());
        if let Some(name) = name {
            let _ = writeln!(output, "#set document(title: {})", typst_string(name));
        }

        output.push_str(&page_setup(geometry));
        output.push_str("#set block(spacing: 0pt)\n");
        output.push_str("#set par(justify: false)\n\n");

        for (block, role) in flow.iter().zip(roles) {
            output.push_str(&self.transpile_block(block, role));
        }

        output
    }

    /// Transpile a single block with its resolved role
    fn transpile_block(&self, block: &Block, role: Role) -> String {
        match block {
            Block::Space(amount) => format!("#v({})\n", pt(*amount)),
            Block::Rule => transpile_rule(&self.styles.rule),
            Block::Bullet(text) => self.transpile_bullet(text),
            Block::Heading(text)
            | Block::SubHeading(text)
            | Block::MetaLine(text)
            | Block::Paragraph(text) => match self.styles.paragraph(role) {
                Some(style) => transpile_text(text, style),
                None => String::new(),
            },
        }
    }

    /// Bullets hang their text to the right of the marker column
    fn transpile_bullet(&self, text: &str) -> String {
        let style = &self.styles.bullet;
        let mut output = open_block(style);
        let _ = writeln!(
            output,
            "  #grid(columns: ({}, 1fr), {}, {})",
            pt(BULLET_COLUMN),
            text_call(&self.styles.bullet_marker, style),
            text_call(text, style)
        );
        output.push_str("]\n");
        output
    }
}

/// `#set page(...)` line for the given geometry
fn page_setup(geometry: &PageGeometry) -> String {
    let m = &geometry.margins;
    format!(
        "#set page(width: {}, height: {}, margin: (top: {}, right: {}, bottom: {}, left: {}))\n",
        pt(geometry.width),
        pt(geometry.height),
        pt(m.top),
        pt(m.right),
        pt(m.bottom),
        pt(m.left)
    )
}

fn transpile_rule(style: &RuleStyle) -> String {
    format!(
        "#block(above: {}, below: {})[#line(length: 100%, stroke: {} + luma({}))]\n",
        pt(style.space_before),
        pt(style.space_after),
        pt(style.thickness),
        style.luma
    )
}

fn transpile_text(text: &str, style: &ParagraphStyle) -> String {
    let align = match style.align {
        Align::Left => "left",
        Align::Center => "center",
    };

    let mut output = open_block(style);
    let _ = writeln!(output, "  #align({}, {})", align, text_call(text, style));
    output.push_str("]\n");
    output
}

/// Opening of a `#block` carrying the style's spacing, indent and leading
fn open_block(style: &ParagraphStyle) -> String {
    format!(
        "#block(above: {}, below: {}, width: 100%, inset: (left: {}))[\n  #set par(leading: {})\n",
        pt(style.space_before),
        pt(style.space_after),
        pt(style.left_indent),
        pt((style.leading - style.size).max(0.0))
    )
}

/// `text(size: .., weight: .., style: .., "literal")`
fn text_call(text: &str, style: &ParagraphStyle) -> String {
    let mut args = format!("size: {}", pt(style.size));
    if style.bold {
        args.push_str(", weight: \"bold\"");
    }
    if style.italic {
        args.push_str(", style: \"italic\"");
    }
    format!("text({}, {})", args, typst_string(text))
}

fn pt(value: f32) -> String {
    format!("{}pt", value)
}

/// Quote a string as a Typst string literal
fn typst_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
