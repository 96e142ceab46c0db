//! specgen CLI - specification checker and generator

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use specgen::{check, load_file, package, render, Document, JsonFormat, RenderOptions};

const USAGE: &str = "Usage: specgen <input path> <output path>";

#[derive(Parser)]
#[command(name = "specgen")]
#[command(version)]
#[command(about = "Check specification grammars and render Markdown or WordprocessingML", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Input specification (JSON)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output file; `.md` writes Markdown, anything else a styled package
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check grammar consistency only
    Check {
        /// Input specification
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },

    /// Render to Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input specification
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Leave out the title block
        #[arg(long)]
        no_title: bool,

        /// Leave out the table of contents
        #[arg(long)]
        no_contents: bool,

        /// Maximum heading level (1-6)
        #[arg(long, default_value = "6")]
        max_heading: u8,

        /// Do not escape Markdown metacharacters in prose
        #[arg(long)]
        no_escape: bool,
    },

    /// Render to a styled WordprocessingML package
    #[command(alias = "xml")]
    Package {
        /// Input specification
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Copyright holder named in the page footers
        #[arg(long, value_name = "NAME", env = "SPECGEN_COPYRIGHT")]
        copyright: Option<String>,
    },

    /// Dump the loaded document tree as JSON
    Json {
        /// Input specification
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show title block and document statistics
    Info {
        /// Input specification
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Check { input }) => cmd_check(&input),
        Some(Commands::Markdown {
            input,
            output,
            no_title,
            no_contents,
            max_heading,
            no_escape,
        }) => {
            let options = RenderOptions::new()
                .with_title(!no_title)
                .with_contents(!no_contents)
                .with_max_heading(max_heading)
                .with_escaping(!no_escape);
            cmd_markdown(&input, output.as_deref(), &options)
        }
        Some(Commands::Package {
            input,
            output,
            copyright,
        }) => cmd_package(&input, output.as_deref(), copyright),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => match (cli.input, cli.output) {
            (Some(input), Some(output)) => cmd_generate(&input, &output),
            _ => {
                println!("{}", USAGE);
                std::process::exit(1);
            }
        },
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Write `content` to `output`, or print it when no path is given.
fn emit(content: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("md"))
        .unwrap_or(false)
}

fn cmd_generate(input: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_file(input)?;

    let pb = ProgressBar::new(2);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Checking...");
    pb.suspend(|| println!("Checking specification..."));
    let report = check(&doc);
    pb.suspend(|| {
        for line in report.lines() {
            println!("{}", line);
        }
        println!("Checked specification...");
    });
    pb.inc(1);

    pb.set_message("Writing...");
    pb.suspend(|| println!("Writing specification..."));
    let options = RenderOptions::default();
    let content = if is_markdown(output) {
        render::to_markdown(&doc, &options)?
    } else {
        package::assemble(&render::to_styled(&doc, &options), &options)
    };
    fs::write(output, &content)?;
    log::debug!("wrote {} bytes to {}", content.len(), output.display());
    pb.inc(1);
    pb.finish_and_clear();

    Ok(())
}

fn cmd_check(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_file(input)?;
    let report = check(&doc);

    for line in report.lines() {
        println!("{}", line);
    }

    if report.is_clean() {
        println!("{}", "No grammar issues found".green().bold());
    } else {
        let noun = if report.len() == 1 { "issue" } else { "issues" };
        println!(
            "{}",
            format!("{} grammar {} found", report.len(), noun)
                .yellow()
                .bold()
        );
    }

    Ok(())
}

fn cmd_markdown(
    input: &Path,
    output: Option<&Path>,
    options: &RenderOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_file(input)?;
    let markdown = render::to_markdown(&doc, options)?;
    emit(&markdown, output)
}

fn cmd_package(
    input: &Path,
    output: Option<&Path>,
    copyright: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_file(input)?;

    let mut options = RenderOptions::new();
    if let Some(holder) = copyright {
        options = options.with_copyright(holder);
    }

    let styled = render::to_styled(&doc, &options);
    let xml = package::assemble(&styled, &options);
    emit(&xml, output)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_file(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = render::to_json(&doc, format)?;
    emit(&json, output)
}

fn print_field(label: &str, value: Option<&str>) {
    if let Some(value) = value {
        println!("{}: {}", label.bold(), value);
    }
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc: Document = load_file(input)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    print_field("Title", doc.head.title.as_deref());
    print_field("Version", doc.head.version.as_deref());
    print_field("Status", doc.head.status());
    print_field("Author", doc.head.author.as_deref());

    let options = RenderOptions::new().with_stats(true);
    let result = render::to_markdown_with_stats(&doc, &options)?;
    let stats = &result.stats;

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Sections".bold(), stats.section_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Code blocks".bold(), stats.code_block_count);
    println!(
        "{}: {} ({} numbered)",
        "Lists".bold(),
        stats.list_count,
        stats.numbered_list_count
    );
    println!("{}: {}", "List items".bold(), stats.list_item_count);
    println!("{}: {}", "Grammar rules".bold(), stats.grammar_rule_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);
    println!("{}: {}", "Grammar issues".bold(), check(&doc).len());

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "specgen".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Specification checker and generator");
    println!();
    println!("License: MIT");
}
