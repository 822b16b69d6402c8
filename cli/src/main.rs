//! unhocr CLI - hOCR line export and inspection tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use unhocr::{ExportOptions, ImageSource, JsonFormat, LineExporter, ReportOptions};

#[derive(Parser)]
#[command(name = "unhocr")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract OCR training lines, text and confidence from hOCR files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy the text and image section of each line into separate files
    Lines {
        /// Input hOCR files
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Directory to save lines in
        #[arg(short = 'd', long = "dir", value_name = "DIR", default_value = ".")]
        dir: PathBuf,

        /// Use the image path embedded in the hOCR rather than FILE with a .png suffix
        #[arg(short = 'e', long)]
        embedded: bool,
    },

    /// Print the text of a hOCR file
    Text {
        /// Input hOCR file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the average word confidence of hOCR files
    Conf {
        /// Input hOCR files
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Print every word confidence instead of the average
        #[arg(long)]
        words: bool,
    },

    /// Print the page and line structure of a hOCR file
    Report {
        /// Input hOCR file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output JSON instead of YAML
        #[arg(long)]
        json: bool,

        /// Output compact JSON
        #[arg(long, requires = "json")]
        compact: bool,

        /// Include words
        #[arg(long)]
        words: bool,

        /// Include per-line confidence
        #[arg(long)]
        confidence: bool,
    },

    /// Show document information
    Info {
        /// Input hOCR file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Lines {
            inputs,
            dir,
            embedded,
        } => cmd_lines(&inputs, dir, embedded),
        Commands::Text { input, output } => cmd_text(&input, output.as_deref()),
        Commands::Conf { inputs, words } => cmd_conf(&inputs, words),
        Commands::Report {
            input,
            output,
            json,
            compact,
            words,
            confidence,
        } => cmd_report(&input, output.as_deref(), json, compact, words, confidence),
        Commands::Info { input } => cmd_info(&input),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_lines(inputs: &[PathBuf], dir: PathBuf, embedded: bool) -> Result<(), Box<dyn std::error::Error>> {
    log::debug!("Exporting {} files to {}", inputs.len(), dir.display());

    let source = if embedded {
        ImageSource::Embedded
    } else {
        ImageSource::Sibling
    };
    let options = ExportOptions::new()
        .with_output_dir(dir)
        .with_image_source(source);

    let exporter = LineExporter::new(options);
    let stats = exporter.export_files(inputs)?;

    println!(
        "{} {} lines from {} files ({} without bbox skipped)",
        "Exported".green().bold(),
        stats.lines_exported,
        stats.documents,
        stats.lines_skipped
    );

    Ok(())
}

fn cmd_text(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let text = unhocr::extract_text(input).map_err(|e| e.in_file(input))?;

    if let Some(path) = output {
        fs::write(path, &text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        print!("{}", text);
    }

    Ok(())
}

fn cmd_conf(inputs: &[PathBuf], words: bool) -> Result<(), Box<dyn std::error::Error>> {
    for input in inputs {
        if words {
            let confs = unhocr::word_confidences(input).map_err(|e| e.in_file(input))?;
            for conf in confs {
                println!("{}", conf);
            }
        } else {
            let avg = unhocr::average_confidence(input).map_err(|e| e.in_file(input))?;
            println!("{}\t{:.2}", input.display(), avg);
        }
    }

    Ok(())
}

fn cmd_report(
    input: &Path,
    output: Option<&Path>,
    json: bool,
    compact: bool,
    words: bool,
    confidence: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = ReportOptions::new()
        .with_words(words)
        .with_confidence(confidence);

    let report = if json {
        let format = if compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        };
        unhocr::to_json(input, &options, format)
    } else {
        unhocr::to_yaml(input, &options)
    }
    .map_err(|e| e.in_file(input))?;

    if let Some(path) = output {
        fs::write(path, &report)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", report);
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = unhocr::parse_file(input).map_err(|e| e.in_file(input))?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    if let Some(ref system) = doc.info.system {
        println!("{}: {}", "OCR system".bold(), system);
    }
    if !doc.info.capabilities.is_empty() {
        println!("{}: {}", "Capabilities".bold(), doc.info.capabilities.join(" "));
    }
    if !doc.info.langs.is_empty() {
        println!("{}: {}", "Languages".bold(), doc.info.langs.join(" "));
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let with_bbox = doc.lines().filter(|line| line.bbox().is_ok()).count();

    println!("{}: {}", "Pages".bold(), doc.page_count());
    println!("{}: {} ({} with bbox)", "Lines".bold(), doc.line_count(), with_bbox);
    println!("{}: {}", "Words".bold(), doc.word_count());

    match unhocr::meta::document_average_confidence(&doc) {
        Ok(avg) => println!("{}: {:.2}", "Mean confidence".bold(), avg),
        Err(e) => println!("{}: n/a ({})", "Mean confidence".bold(), e),
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "unhocr".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("hOCR line export and inspection tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/unhocr".dimmed());
    println!("License: MIT");
}
