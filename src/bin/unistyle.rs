// src/bin/unistyle.rs

use std::io::Read;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::debug;
use unistyle::{Converter, Error, OptionValues, StyleDefinition};

#[derive(Parser)]
#[command(name = "unistyle")]
#[command(author, version, about = "Convert text into Unicode styles", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every available style
    List {
        /// Print styles as JSON
        #[arg(long)]
        json: bool,
    },
    /// Convert text with one style
    Convert {
        /// Style identifier (see `unistyle list`)
        style: String,
        /// Text to convert (reads stdin when omitted)
        text: Option<String>,
        /// Option override, e.g. `--option intensity=7`
        #[arg(short, long = "option", value_name = "KEY=VALUE", value_parser = parse_option)]
        options: Vec<(String, i32)>,
    },
    /// Convert text with every style
    All {
        /// Text to convert (reads stdin when omitted)
        text: Option<String>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Parse a `key=value` option override
fn parse_option(raw: &str) -> Result<(String, i32)> {
    let Some((key, value)) = raw.split_once('=') else {
        bail!("expected KEY=VALUE, got '{raw}'");
    };
    let value = value
        .trim()
        .parse()
        .with_context(|| format!("option '{key}' needs an integer value"))?;
    Ok((key.trim().to_string(), value))
}

/// Collect overrides, rejecting keys the style does not declare
fn collect_overrides(
    style: &StyleDefinition,
    options: Vec<(String, i32)>,
) -> Result<OptionValues, Error> {
    let mut overrides = OptionValues::new();
    for (key, value) in options {
        if style.option(&key).is_none() {
            return Err(Error::UnknownOption {
                style: style.id().to_string(),
                key,
            });
        }
        overrides.insert(key, value);
    }
    Ok(overrides)
}

/// Drop one trailing line ending (`\n` or `\r\n`)
fn strip_line_ending(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

/// Use the argument if given, otherwise read all of stdin
fn input_text(text: Option<String>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read text from stdin")?;
    Ok(strip_line_ending(buf))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let converter = Converter::new();

    match cli.command {
        Commands::List { json } => {
            let styles = converter.list_styles();
            if json {
                println!("{}", serde_json::to_string_pretty(&styles)?);
            } else {
                for style in &styles {
                    print!("{:<20} {}", style.id, style.display_name);
                    for option in &style.declared_options {
                        print!(
                            "  [{}: {}..={}, default {}]",
                            option.key, option.min, option.max, option.default
                        );
                    }
                    println!();
                }
            }
        }
        Commands::Convert {
            style,
            text,
            options,
        } => {
            let definition = converter.catalog().get_style(&style)?;
            let overrides = collect_overrides(definition, options)?;
            let text = input_text(text)?;
            debug!(style = %style, options = ?overrides, "converting");

            let output = if overrides.is_empty() {
                converter.convert(&text, &style)?
            } else {
                converter.convert_with(&text, &style, &overrides)?
            };
            println!("{output}");
        }
        Commands::All { text, json } => {
            let text = input_text(text)?;
            let results = converter.convert_all(&text);
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                for result in &results {
                    println!("{}: {}", result.name, result.output);
                }
            }
        }
    }

    Ok(())
}
