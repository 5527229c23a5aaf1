//! Htmlsense CLI - Cursor-context intelligence for embedded HTML fragments
//!
//! # Usage
//!
//! ```bash
//! # Get completions at a byte offset in a component source file
//! htmlsense complete component.ts --offset 120
//!
//! # Same position given as 1-based line and column
//! htmlsense complete component.ts --line 4 --column 18
//!
//! # Matching open/close pair, JSON output
//! htmlsense highlight component.ts --offset 120 --format json
//!
//! # Operate on a bare markup file instead of a host document
//! htmlsense hover snippet.html --offset 2 --raw
//!
//! # Knowledge base counters
//! htmlsense stats
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use htmlsense::types::{offset_at, position_at};
use htmlsense::{Engine, Position};

#[derive(Parser)]
#[command(name = "htmlsense")]
#[command(about = "Cursor-context intelligence for HTML embedded in component source")]
#[command(version)]
struct Cli {
    /// Output format (text, json)
    #[arg(long, short, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A file plus a cursor position, shared by every query subcommand.
#[derive(Args)]
struct Location {
    /// Path to the source file
    file: PathBuf,

    /// Cursor position as a byte offset
    #[arg(long, short)]
    offset: Option<usize>,

    /// Line number (1-based), used with --column when --offset is absent
    #[arg(long, short)]
    line: Option<u32>,

    /// Column number (1-based)
    #[arg(long, short)]
    column: Option<u32>,

    /// Treat the file as bare markup instead of a host document
    #[arg(long)]
    raw: bool,
}

impl Location {
    fn read(&self) -> Result<(String, usize)> {
        let source = std::fs::read_to_string(&self.file)
            .with_context(|| format!("reading {}", self.file.display()))?;
        let cursor = match (self.offset, self.line, self.column) {
            (Some(offset), _, _) => offset,
            (None, Some(line), Some(column)) => offset_at(&source, Position { line, column }),
            _ => bail!("specify --offset, or both --line and --column"),
        };
        Ok((source, cursor))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Get completions at a position
    Complete(Location),

    /// Get hover information at a position
    Hover(Location),

    /// Get the matching open/close pair at a position
    Highlight(Location),

    /// Show the resolved cursor context at a position
    Context(Location),

    /// Show knowledge base counters
    Stats,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let engine = Engine::new();

    match cli.command {
        Commands::Complete(loc) => {
            let (source, cursor) = loc.read()?;
            let result = if loc.raw {
                engine.complete(&source, cursor)
            } else {
                engine.complete_document(&source, cursor)
            };

            match cli.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                }
                OutputFormat::Text => {
                    if result.items.is_empty() {
                        println!("No completions found");
                    } else {
                        println!("Completions ({}):", result.items.len());
                        for item in &result.items {
                            let kind = format!("{:?}", item.kind);
                            println!("  {:24} {:10} {}", item.label, kind, item.insert_text);
                        }
                    }
                }
            }
        }

        Commands::Hover(loc) => {
            let (source, cursor) = loc.read()?;
            let result = if loc.raw {
                engine.hover(&source, cursor)
            } else {
                engine.hover_document(&source, cursor)
            };

            match cli.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                }
                OutputFormat::Text => {
                    if let Some(info) = result.info {
                        println!("{}", info.label);
                        println!("{}", info.documentation);
                    } else {
                        println!("No hover information");
                    }
                }
            }
        }

        Commands::Highlight(loc) => {
            let (source, cursor) = loc.read()?;
            let ranges = if loc.raw {
                match engine.highlight(&source, cursor) {
                    Some(pair) => vec![
                        htmlsense::HighlightRange {
                            start: pair.open_start,
                            end: pair.open_end,
                        },
                        htmlsense::HighlightRange {
                            start: pair.close_start,
                            end: pair.close_end,
                        },
                    ],
                    None => Vec::new(),
                }
            } else {
                engine.highlight_document(&source, cursor)
            };

            match cli.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&ranges)?);
                }
                OutputFormat::Text => {
                    if ranges.is_empty() {
                        println!("No matching pair");
                    } else {
                        for range in &ranges {
                            let pos = position_at(&source, range.start);
                            println!(
                                "{}..{} ({}:{})  {}",
                                range.start,
                                range.end,
                                pos.line,
                                pos.column,
                                &source[range.start..range.end]
                            );
                        }
                    }
                }
            }
        }

        Commands::Context(loc) => {
            let (source, cursor) = loc.read()?;
            let ctx = if loc.raw {
                engine.context(&source, cursor)
            } else {
                match htmlsense::find_fragment(&source, cursor) {
                    Some(frag) => engine.context(frag.text, frag.cursor),
                    None => Default::default(),
                }
            };

            match cli.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&ctx)?);
                }
                OutputFormat::Text => {
                    println!("Cursor context at offset {}", cursor);
                    println!("  Element:            {:?}", ctx.element);
                    println!("  In element name:    {}", ctx.inside_element_name);
                    println!("  In element body:    {}", ctx.inside_element_body);
                    println!("  In attribute value: {}", ctx.inside_attribute_value);
                    println!("  Attribute:          {:?}", ctx.attribute);
                }
            }
        }

        Commands::Stats => {
            let stats = engine.stats();

            match cli.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&stats)?);
                }
                OutputFormat::Text => {
                    println!("Knowledge base:");
                    println!("  Tags:              {}", stats.tags);
                    println!("  Global attributes: {}", stats.global_attributes);
                    println!("  Value sets:        {}", stats.value_sets);
                }
            }
        }
    }

    Ok(())
}
