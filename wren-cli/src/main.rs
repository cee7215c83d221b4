//! Wren CLI
//!
//! Parses a markup fragment and prints the resulting node tree.
//!
//! Usage:
//!   wren <file>                 Print the node tree
//!   wren <file> --json          Print the nodes as JSON
//!   wren --html '<p>Hi</p>'     Parse a string instead of a file
//!   wren <file> --strict        Reject elements left open at end of input
//!   wren <file> --issues        Also report non-fatal parse issues

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use wren_common::warning::warn_once;
use wren_dom::Node;
use wren_html::{FragmentParser, IssueKind, ParseIssue, Position, print_tree};

#[derive(Debug, Parser)]
#[command(name = "wren", version, about = "Parse a markup fragment and print its node tree")]
struct Cli {
    /// Markup file to parse
    #[arg(required_unless_present = "html", conflicts_with = "html")]
    file: Option<PathBuf>,

    /// Parse this markup string instead of a file
    #[arg(long, value_name = "MARKUP")]
    html: Option<String>,

    /// Print the nodes as pretty JSON
    #[arg(short, long)]
    json: bool,

    /// Fail if input ends while elements are still open
    #[arg(long)]
    strict: bool,

    /// Print non-fatal parse issues to stderr
    #[arg(short, long)]
    issues: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let (source, label) = match (&cli.html, &cli.file) {
        (Some(html), _) => (html.clone(), String::from("<--html>")),
        (None, Some(path)) => (
            fs::read_to_string(path)
                .with_context(|| format!("failed to read '{}'", path.display()))?,
            path.display().to_string(),
        ),
        (None, None) => anyhow::bail!("no input file or --html provided"),
    };

    let mut parser = FragmentParser::new(&source);
    if cli.strict {
        parser = parser.with_strict_mode();
    }

    let (nodes, issues) = match parser.run_with_issues() {
        Ok(parsed) => parsed,
        Err(e) => {
            eprint!("{}", snippet(&source, e.position()));
            return Err(e).with_context(|| format!("failed to parse {label}"));
        }
    };

    if cli.issues {
        report_issues(&issues);
    } else {
        summarize_issues(&issues);
    }
    output(&nodes, cli.json)
}

fn output(nodes: &[Node], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(nodes)?);
    } else {
        print_tree(nodes, 0);
    }
    Ok(())
}

fn report_issues(issues: &[ParseIssue]) {
    for issue in issues {
        eprintln!("{} {issue}", "warning:".yellow().bold());
    }
}

/// One line per kind of issue found, leaving the details to `--issues`.
/// Messages never include input text, so the deduplication set stays small.
fn summarize_issues(issues: &[ParseIssue]) {
    for issue in issues {
        warn_once("CLI", &summary(issue.kind));
    }
}

fn summary(kind: IssueKind) -> String {
    format!("input has {kind} issues; rerun with --issues to list them")
}

/// The source line containing `position` with a caret under its column.
fn snippet(source: &str, position: Position) -> String {
    let line = source.lines().nth(position.line - 1).unwrap_or("");
    let gutter = position.line.to_string();
    format!(
        "{gutter} | {line}\n{} | {}^\n",
        " ".repeat(gutter.len()),
        " ".repeat(position.column - 1)
    )
}
