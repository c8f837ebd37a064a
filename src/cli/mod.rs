//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the
//! appropriate commands.

mod output;

use std::error::Error;
use std::io::Read;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::core::config::Config;
use crate::parser::{extract_hashtags, extract_mentions, extract_urls, parse_text};

#[derive(Parser)]
#[command(name = "taptext")]
#[command(about = "Inspect how post text splits into tappable segments")]
#[command(
    long_about = "Taptext splits free-form post or comment text into typed segments: plain \
text, web links, @mentions, and #hashtags. The parse is lossless and order-preserving, so \
the printed segments concatenate back to the input.\n\n\
Text is taken from the command line when given, otherwise from standard input:\n\
  taptext parse \"Check out https://ragestate.com with @djshadow!\"\n\
  cat post.txt | taptext urls\n\n\
Configuration:\n\
  taptext set output json            Always print JSON\n\
  taptext set url-display-length 60  Widen URL display truncation\n\
  taptext set                        Show current configuration"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print results as JSON instead of plain lines
    #[arg(long, global = true)]
    pub json: bool,

    /// Display width for URLs in plain output
    #[arg(long, global = true, value_name = "COLUMNS")]
    pub url_width: Option<usize>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse text into segments (default)
    Parse {
        /// Text to parse; read from stdin when omitted
        text: Option<String>,
    },
    /// List the navigable address of every link in the text
    Urls {
        /// Text to scan; read from stdin when omitted
        text: Option<String>,
    },
    /// List the bare handle of every @mention in the text
    Mentions {
        /// Text to scan; read from stdin when omitted
        text: Option<String>,
    },
    /// List the bare tag of every #hashtag in the text
    Hashtags {
        /// Text to scan; read from stdin when omitted
        text: Option<String>,
    },
    /// Set configuration values (no arguments shows the configuration)
    Set {
        /// Configuration key to set
        key: Option<String>,
        /// Value to set for the key
        value: Option<String>,
    },
    /// Unset configuration values
    Unset {
        /// Configuration key to unset
        key: String,
    },
}

pub fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    run(Args::parse())
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut config = Config::load()?;
    let json = args.json || config.output_is_json();
    let url_width = args.url_width.unwrap_or_else(|| config.display_length());

    match args.command.unwrap_or(Commands::Parse { text: None }) {
        Commands::Parse { text } => {
            let text = read_input(text)?;
            let segments = parse_text(&text);
            debug!(count = segments.len(), "parsed input into segments");
            if json {
                println!("{}", output::render_segments_json(&segments)?);
            } else {
                print!("{}", output::render_segments_plain(&segments, url_width));
            }
            Ok(())
        }
        Commands::Urls { text } => print_projection(text, json, extract_urls),
        Commands::Mentions { text } => print_projection(text, json, extract_mentions),
        Commands::Hashtags { text } => print_projection(text, json, extract_hashtags),
        Commands::Set { key: None, .. } => {
            config.print_all();
            Ok(())
        }
        Commands::Set {
            key: Some(key),
            value,
        } => {
            let value = value.ok_or_else(|| format!("Missing value for configuration key '{key}'."))?;
            config.set_value(&key, &value)?;
            config.save()?;
            debug!(key = %key, value = %value, "configuration updated");
            println!("Set {key} = {value}");
            Ok(())
        }
        Commands::Unset { key } => {
            config.unset_value(&key)?;
            config.save()?;
            println!("Unset {key}");
            Ok(())
        }
    }
}

fn print_projection(
    text: Option<String>,
    json: bool,
    extract: fn(&str) -> Vec<String>,
) -> Result<(), Box<dyn Error>> {
    let text = read_input(text)?;
    let items = extract(&text);
    debug!(count = items.len(), "extracted items from input");
    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        print!("{}", output::render_list_plain(&items));
    }
    Ok(())
}

fn read_input(text: Option<String>) -> Result<String, Box<dyn Error>> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            // A pipe's final newline belongs to the shell, not the post body.
            if buffer.ends_with('\n') {
                buffer.pop();
            }
            Ok(buffer)
        }
    }
}
