//! # beaulytics
//!
//! Command-line front end for beaulyticslib.
//!
//! ## Usage
//!
//! ```bash
//! # Format a diagnosis report saved from the endpoint
//! beaulytics format report.md
//!
//! # Format from stdin without brand classes
//! echo "**Halo**" | beaulytics format --plain
//!
//! # Inspect how a document is segmented
//! beaulytics segments report.md
//!
//! # Format the content of an endpoint reply, failing on an error object
//! beaulytics reply reply.json --output json
//!
//! # Render a chat transcript, injecting a diagnosis as context
//! beaulytics messages chat.json --context "acne ringan"
//! ```

use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::Context;
use beaulyticslib::{
    inject_context, parse_messages, segment, AiReply, FormatOptions, Formatter, HtmlClasses,
};
use clap::{Arg, ArgAction, ArgMatches, Command};
use console::style;
use tracing_subscriber::EnvFilter;

/// Build the clap Command structure
fn build_command() -> Command {
    let input = || {
        Arg::new("input")
            .help("Input file (reads stdin when omitted or '-')")
            .default_value("-")
    };

    Command::new("beaulytics")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Format AI chat replies and skin diagnosis reports as HTML")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .global(true)
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output mode"),
        )
        .arg(
            Arg::new("plain")
                .long("plain")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit bare HTML without brand classes"),
        )
        .arg(
            Arg::new("bullet")
                .long("bullet")
                .global(true)
                .help("Glyph used for '-' bullets"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging on stderr"),
        )
        .subcommand(
            Command::new("format")
                .about("Format a text document as HTML")
                .arg(input()),
        )
        .subcommand(
            Command::new("segments")
                .about("Show the table/text segments of a document as JSON")
                .arg(input()),
        )
        .subcommand(
            Command::new("reply")
                .about("Format the content of an AI endpoint reply (JSON)")
                .arg(input()),
        )
        .subcommand(
            Command::new("messages")
                .about("Render a JSON array of chat messages")
                .arg(input())
                .arg(
                    Arg::new("context")
                        .short('c')
                        .long("context")
                        .help("Diagnosis report to inject into the last message"),
                ),
        )
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Read the named file, or stdin for `-`
fn read_input(matches: &ArgMatches) -> anyhow::Result<String> {
    let path = matches
        .get_one::<String>("input")
        .map(|s| s.as_str())
        .unwrap_or("-");

    if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read file '{path}'"))
    }
}

/// Build the formatter from global flags
fn build_formatter(matches: &ArgMatches) -> Formatter {
    let mut options = FormatOptions::new();
    if matches.get_flag("plain") {
        options = options.classes(HtmlClasses::plain());
    }
    if let Some(bullet) = matches.get_one::<String>("bullet") {
        options = options.bullet(bullet);
    }
    Formatter::new(options)
}

fn is_json(matches: &ArgMatches) -> bool {
    matches.get_one::<String>("output").map(|s| s.as_str()) == Some("json")
}

fn emit_html(html: &str, json: bool) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(&serde_json::json!({ "html": html }))?)
    } else {
        Ok(html.to_string())
    }
}

/// Handler for format command
fn format_handler(matches: &ArgMatches) -> anyhow::Result<String> {
    let text = read_input(matches)?;
    let html = build_formatter(matches).format(&text);
    emit_html(&html, is_json(matches))
}

/// Handler for segments command
fn segments_handler(matches: &ArgMatches) -> anyhow::Result<String> {
    let text = read_input(matches)?;
    let segments = segment(text.trim());
    Ok(serde_json::to_string_pretty(&segments)?)
}

/// Handler for reply command
fn reply_handler(matches: &ArgMatches) -> anyhow::Result<String> {
    let reply = AiReply::from_json(&read_input(matches)?)?;
    let content = reply.into_content()?;
    let html = build_formatter(matches).format(&content);
    emit_html(&html, is_json(matches))
}

/// Handler for messages command
fn messages_handler(matches: &ArgMatches) -> anyhow::Result<String> {
    let mut messages = parse_messages(&read_input(matches)?)?;
    if let Some(context) = matches.get_one::<String>("context") {
        inject_context(&mut messages, context);
    }

    let formatter = build_formatter(matches);
    let rendered: Vec<(String, String)> = messages
        .iter()
        .filter_map(|m| m.render(&formatter).map(|html| (m.role.as_str().to_string(), html)))
        .collect();
    tracing::debug!(
        messages = messages.len(),
        rendered = rendered.len(),
        "rendered chat messages"
    );

    if is_json(matches) {
        let value: Vec<serde_json::Value> = rendered
            .iter()
            .map(|(role, html)| serde_json::json!({ "role": role, "html": html }))
            .collect();
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    Ok(rendered
        .iter()
        .map(|(role, html)| format!("<div class=\"message {role}\">{html}</div>"))
        .collect::<Vec<_>>()
        .join("\n"))
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_flag("verbose"));

    let result = match matches.subcommand() {
        Some(("format", sub)) => format_handler(sub),
        Some(("segments", sub)) => segments_handler(sub),
        Some(("reply", sub)) => reply_handler(sub),
        Some(("messages", sub)) => messages_handler(sub),
        _ => unreachable!("subcommand is required"),
    };

    match result {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {e:#}", style("Error:").red().bold().for_stderr());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_valid() {
        build_command().debug_assert();
    }

    #[test]
    fn test_global_flags_reach_subcommands() {
        let matches = build_command()
            .try_get_matches_from(["beaulytics", "format", "--plain", "--bullet", "*", "-o", "json"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert!(sub.get_flag("plain"));
        assert!(is_json(sub));
        let formatter = build_formatter(sub);
        assert_eq!(formatter.options().bullet, "*");
        assert!(formatter.options().classes.table.is_empty());
    }

    #[test]
    fn test_emit_html_json() {
        let out = emit_html("<em>a</em>", true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["html"], "<em>a</em>");
    }
}
