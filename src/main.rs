//! CLI for md2docx - Markdown to DOCX converter

use clap::{ArgAction, Parser};
use md2docx::{convert_directory, BatchReport, ConvertOptions, MarkdownToDocx};
use std::path::{Path, PathBuf};

/// Directory created inside the input directory when no output is given.
const DEFAULT_BATCH_OUTPUT: &str = "Word Documents";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input Markdown file, or a directory of .md files
    input: PathBuf,

    /// Output DOCX file, or output directory in directory mode
    output: Option<PathBuf>,

    /// Monospace font for code blocks and inline code
    #[arg(long)]
    code_font: Option<String>,

    /// Table style id applied to every table
    #[arg(long)]
    table_style: Option<String>,

    /// Render links as styled text instead of clickable hyperlinks
    #[arg(long)]
    no_hyperlinks: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn convert_options(&self) -> ConvertOptions {
        let mut options = ConvertOptions {
            hyperlinks: !self.no_hyperlinks,
            ..Default::default()
        };
        if let Some(font) = &self.code_font {
            options.code_font = font.clone();
        }
        if let Some(style) = &self.table_style {
            options.table_style = style.clone();
        }
        options
    }

    fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level())
        .init();

    let converter = MarkdownToDocx::new(args.convert_options());
    log::debug!("options: {:?}", converter.options());

    let ok = if args.input.is_dir() {
        let output_dir = args
            .output
            .clone()
            .unwrap_or_else(|| args.input.join(DEFAULT_BATCH_OUTPUT));
        run_batch(&converter, &args.input, &output_dir)
    } else {
        let output = args
            .output
            .clone()
            .unwrap_or_else(|| args.input.with_extension("docx"));
        run_single(&converter, &args.input, &output)
    };

    if !ok {
        std::process::exit(1);
    }
}

fn run_single(converter: &MarkdownToDocx, input: &Path, output: &Path) -> bool {
    match converter.convert(input, output) {
        Ok(()) => {
            println!("Successfully converted to {:?}", output);
            true
        }
        Err(e) => {
            eprintln!("Error converting Markdown: {}", e);
            false
        }
    }
}

fn run_batch(converter: &MarkdownToDocx, input: &Path, output_dir: &Path) -> bool {
    match convert_directory(converter, input, output_dir) {
        Ok(report) => {
            print_summary(&report, output_dir);
            report.is_success()
        }
        Err(e) => {
            eprintln!("Error converting directory: {}", e);
            false
        }
    }
}

fn print_summary(report: &BatchReport, output_dir: &Path) {
    let total = report.total();
    println!("Found {} markdown files", total);
    println!("Output directory: {}\n", output_dir.display());

    for (source, _) in &report.converted {
        println!("Converting: {}... [OK]", file_name(source));
    }
    for (source, e) in &report.failed {
        println!("Converting: {}... [FAILED] {}", file_name(source), e);
    }

    println!("\n{}", "=".repeat(60));
    println!("Conversion Summary:");
    println!("[OK] Successful: {}/{}", report.success_count(), total);
    println!("[FAILED] Failed: {}/{}", report.failure_count(), total);

    if !report.failed.is_empty() {
        println!("\nFailed files:");
        for (source, _) in &report.failed {
            println!("  - {}", file_name(source));
        }
    }

    println!("\nWord documents saved to: {}", output_dir.display());
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
