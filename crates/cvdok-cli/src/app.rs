//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};

use cvdok_ast::{Block, ContentFlow, PageGeometry, ResumeRecord};
use cvdok_core::{load_record, loader, Assembler, Locale};
use cvdok_pdf::TypstRenderer;

use crate::config::Settings;
use crate::export::export;

/// Output format for the `flow` command
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum FlowFormat {
    /// One block per line
    #[default]
    Text,
    /// JSON array of blocks
    Json,
    /// Typst markup that would be compiled to PDF
    Typst,
}

#[derive(Parser)]
#[command(name = "cvdok")]
#[command(author, version, about = "Plain data in, clean resume out", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a sample resume record to start from
    Init {
        /// Record file to create
        #[arg(default_value = "resume.toml")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the assembled content flow of a record
    Flow {
        /// Record file (.toml or .json)
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: FlowFormat,

        /// Section title language (pt-BR or en)
        #[arg(short, long)]
        locale: Option<Locale>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Render a record to PDF
    Render {
        /// Record file (.toml or .json)
        input: PathBuf,

        /// Output PDF file (defaults to the input with a .pdf extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Section title language (pt-BR or en)
        #[arg(short, long)]
        locale: Option<Locale>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Init { path, force } => {
            init_command(&path, force)?;
        }
        Commands::Flow {
            input,
            format,
            locale,
            config,
        } => {
            let output = flow_command(&input, format, locale, config.as_deref())?;
            print!("{}", output);
        }
        Commands::Render {
            input,
            output,
            locale,
            config,
        } => {
            render_command(&input, output.as_deref(), locale, config.as_deref())?;
        }
    }

    Ok(())
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` takes precedence over the default level.
fn init_logging(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Execute the init command
pub fn init_command(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let content = loader::to_toml_string(&loader::sample_record())
        .context("Failed to serialize sample record")?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write record file: {}", path.display()))?;

    info!("Created {}", path.display());
    Ok(())
}

/// Execute the flow command, returning the text to print
pub fn flow_command(
    input: &Path,
    format: FlowFormat,
    locale: Option<Locale>,
    config: Option<&Path>,
) -> Result<String> {
    let (record, settings) = load_inputs(input, locale, config)?;
    let flow = assembler_for(&settings).assemble(&record);
    debug!("Assembled {} blocks from {}", flow.len(), input.display());

    let output = match format {
        FlowFormat::Text => format_flow_text(&flow),
        FlowFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(&flow).context("Failed to serialize flow")?;
            json.push('\n');
            json
        }
        FlowFormat::Typst => renderer_for(&settings).markup(&flow, &PageGeometry::letter()),
    };

    Ok(output)
}

/// Execute the render command
pub fn render_command(
    input: &Path,
    output: Option<&Path>,
    locale: Option<Locale>,
    config: Option<&Path>,
) -> Result<()> {
    let (record, settings) = load_inputs(input, locale, config)?;

    let output_path = match output {
        Some(p) => p.to_path_buf(),
        None => input.with_extension("pdf"),
    };

    info!("Rendering {} -> {}", input.display(), output_path.display());
    let report = export(
        &record,
        &assembler_for(&settings),
        &renderer_for(&settings),
        &PageGeometry::letter(),
        &output_path,
    )
    .with_context(|| format!("Export to {} failed", output_path.display()))?;

    println!("Render complete!");
    println!("  Output: {}", report.path.display());
    println!("  Size: {} bytes", report.bytes);
    println!("  Blocks: {}", report.blocks);

    Ok(())
}

/// Read the record and its settings, applying a `--locale` override
fn load_inputs(
    input: &Path,
    locale: Option<Locale>,
    config: Option<&Path>,
) -> Result<(ResumeRecord, Settings)> {
    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    let record = load_record(input)
        .with_context(|| format!("Failed to load record: {}", input.display()))?;

    let mut settings = Settings::resolve(config, input).context("Failed to load configuration")?;
    if let Some(locale) = locale {
        settings.document.locale = locale;
    }
    debug!("Section titles: {}", settings.document.locale);

    Ok((record, settings))
}

fn assembler_for(settings: &Settings) -> Assembler {
    Assembler::with_config(settings.assembler_config())
}

fn renderer_for(settings: &Settings) -> TypstRenderer {
    TypstRenderer::new().with_fonts(settings.fonts.paths.clone())
}

/// One line per block, e.g. `Heading     ANA SILVA`
pub fn format_flow_text(flow: &ContentFlow) -> String {
    let mut output = String::new();
    for block in flow {
        let line = match block {
            Block::Heading(text) => format!("Heading     {}", text),
            Block::SubHeading(text) => format!("SubHeading  {}", text),
            Block::MetaLine(text) => format!("MetaLine    {}", text),
            Block::Rule => "Rule".to_string(),
            Block::Paragraph(text) => format!("Paragraph   {}", text.replace('\n', "\\n")),
            Block::Bullet(text) => format!("Bullet      {}", text),
            Block::Space(amount) => format!("Space       {}pt", amount),
        };
        output.push_str(&line);
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render_args() {
        let cli = Cli::try_parse_from([
            "cvdok", "render", "cv.toml", "-o", "out.pdf", "--locale", "en",
        ])
        .unwrap();

        match cli.command {
            Commands::Render {
                input,
                output,
                locale,
                config,
            } => {
                assert_eq!(input, PathBuf::from("cv.toml"));
                assert_eq!(output, Some(PathBuf::from("out.pdf")));
                assert_eq!(locale, Some(Locale::En));
                assert!(config.is_none());
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_locale() {
        assert!(Cli::try_parse_from(["cvdok", "flow", "cv.toml", "--locale", "xx"]).is_err());
    }

    #[test]
    fn test_format_flow_text() {
        let flow = ContentFlow::from(vec![
            Block::Heading("ANA".to_string()),
            Block::Rule,
            Block::Paragraph("a\nb".to_string()),
            Block::Space(7.2),
        ]);
        assert_eq!(
            format_flow_text(&flow),
            "Heading     ANA\nRule\nParagraph   a\\nb\nSpace       7.2pt\n"
        );
    }
}
