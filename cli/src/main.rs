//! unxmind CLI - mind-map archive to Markdown converter

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;

use unxmind::{output_path_for, parse_file, RenderOptions};

#[derive(Parser)]
#[command(name = "unxmind")]
#[command(version)]
#[command(about = "Convert mind-map archives (.xmind) to Markdown", long_about = None)]
struct Cli {
    /// Input .xmind file (prompted for when omitted)
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    file: Option<PathBuf>,

    /// Input .xmind file, as a positional argument
    #[arg(value_name = "INPUT", conflicts_with = "file")]
    input: Option<PathBuf>,

    /// Output file (defaults to the input path with a .md extension)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print Markdown to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    stdout: bool,

    /// Maximum heading level for nested topics (2-6)
    #[arg(long, default_value = "6")]
    max_heading: u8,

    /// Omit the blank separator written after each sheet
    #[arg(long)]
    no_separator: bool,

    /// Wait this many seconds before exiting on error
    #[arg(long, global = true, value_name = "SECS")]
    pause_on_error: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show document information
    Info {
        /// Input .xmind file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let pause = cli.pause_on_error;

    let result = match cli.command {
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            let options = RenderOptions::new()
                .with_max_heading(cli.max_heading)
                .with_sheet_separator(!cli.no_separator);
            resolve_input(cli.file.or(cli.input)).and_then(|input| {
                cmd_convert(&input, cli.output.as_deref(), cli.stdout, &options)
            })
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        if let Some(secs) = pause {
            std::thread::sleep(Duration::from_secs(secs));
        }
        std::process::exit(1);
    }
}

/// Use the given path, or ask for one on stdin.
fn resolve_input(input: Option<PathBuf>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(path) = input {
        return Ok(path);
    }

    print!("Path to .xmind file: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    parse_prompt_answer(&line).ok_or_else(|| "an input .xmind file path is required".into())
}

/// Trim whitespace and the quotes some shells add to dropped paths.
fn parse_prompt_answer(line: &str) -> Option<PathBuf> {
    let trimmed = line.trim().trim_matches('"').trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    to_stdout: bool,
    options: &RenderOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;
    log::info!("Loaded {} sheet(s) from {}", doc.sheet_count(), input.display());

    if to_stdout {
        let stdout = io::stdout();
        unxmind::render::write_markdown(&doc, options, stdout.lock())?;
        return Ok(());
    }

    let path = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| output_path_for(input));
    unxmind::write_markdown_file(&doc, &path, options)?;
    println!("{} {}", "Markdown written:".green(), path.display());

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input)?;
    let result = unxmind::render::to_markdown_with_stats(&doc, &RenderOptions::default());
    let stats = &result.stats;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Sheets".bold(), doc.sheet_count());
    for (i, sheet) in doc.sheets.iter().enumerate() {
        println!("  {} {}", format!("{}.", i + 1).dimmed(), sheet.title());
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Topics".bold(), stats.topic_count);
    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Links".bold(), stats.link_count);
    println!("{}: {}", "Max depth".bold(), stats.max_depth);
    if stats.clamped_heading_count > 0 {
        println!(
            "{}: {}",
            "Capped headings".bold(),
            stats.clamped_heading_count
        );
    }
    println!("{}: {}", "Markdown bytes".bold(), result.content_len());

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "unxmind".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Mind-map archive to Markdown converter");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_answer() {
        assert_eq!(parse_prompt_answer("  map.xmind\n"), Some(PathBuf::from("map.xmind")));
        assert_eq!(
            parse_prompt_answer("\"C:\\maps\\plan.xmind\"\r\n"),
            Some(PathBuf::from("C:\\maps\\plan.xmind"))
        );
        assert_eq!(parse_prompt_answer("   \n"), None);
        assert_eq!(parse_prompt_answer(""), None);
    }

    #[test]
    fn test_cli_flag_file() {
        let cli = Cli::try_parse_from(["unxmind", "-f", "plan.xmind"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("plan.xmind")));
        assert_eq!(cli.max_heading, 6);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_conflicting_inputs() {
        let result = Cli::try_parse_from(["unxmind", "-f", "a.xmind", "b.xmind"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_info_subcommand() {
        let cli = Cli::try_parse_from(["unxmind", "info", "plan.xmind"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Info { .. })));
    }

    #[test]
    fn test_cli_pause_option() {
        let cli = Cli::try_parse_from(["unxmind", "--pause-on-error", "600", "-f", "x.xmind"])
            .unwrap();
        assert_eq!(cli.pause_on_error, Some(600));
    }

    #[test]
    fn test_convert_writes_nothing_on_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("missing.xmind");
        let result = cmd_convert(&input, None, false, &RenderOptions::default());
        assert!(result.is_err());
        assert!(!dir.path().join("missing.md").exists());
    }
}
