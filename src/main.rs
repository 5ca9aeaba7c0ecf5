//! Investor Summary CLI
//!
//! Usage:
//!   investor-summary [OPTIONS] [DECK]
//!
//! Options:
//!   -o, --output <FILE>      Output PDF path (default: investor-summary.pdf)
//!   -s, --stylesheet <FILE>  Stylesheet file for color palette (TOML format)
//!   -m, --mascot <FILE>      PNG, JPEG or data-URL image for the magic page
//!   --strict                 Validate every section before rendering
//!   --sample                 Print a sample deck and exit
//!   -v                       Increase log verbosity
//!   -h, --help               Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use investor_summary::{
    export_with_config, parse_deck, ExportConfig, PageConfig, PdfConfig, Stylesheet,
    DEFAULT_FILENAME,
};

const SAMPLE_DECK: &str = include_str!("../demos/investor-summary.json");

#[derive(Parser)]
#[command(name = "investor-summary")]
#[command(about = "Render a structured investor deck to a one-page-per-section PDF")]
struct Cli {
    /// JSON deck (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Output PDF path
    #[arg(short, long, default_value = DEFAULT_FILENAME)]
    output: PathBuf,

    /// Stylesheet file for color palette (TOML format)
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// Mascot image shown on the magic page
    #[arg(short, long)]
    mascot: Option<PathBuf>,

    /// Validate every section and fail on the first invalid one
    #[arg(long)]
    strict: bool,

    /// Footer text shown on the left of every page
    #[arg(long)]
    copyright: Option<String>,

    /// Document title written to the PDF metadata
    #[arg(long)]
    title: Option<String>,

    /// Page margin in millimetres
    #[arg(long)]
    margin: Option<f64>,

    /// Compress page content streams
    #[arg(long)]
    compress: bool,

    /// Print a sample deck and exit
    #[arg(long)]
    sample: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.sample {
        print!("{}", SAMPLE_DECK);
        return;
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let stylesheet = match &cli.stylesheet {
        Some(path) => match Stylesheet::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading stylesheet '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Stylesheet::default(),
    };

    let mascot = match &cli.mascot {
        Some(path) => match fs::read(path) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                eprintln!("Error reading mascot '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => None,
    };

    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let sections = match parse_deck(&source) {
        Ok(sections) => sections,
        Err(e) => {
            eprintln!("Error parsing deck: {}", e);
            std::process::exit(1);
        }
    };

    let mut page = PageConfig::default();
    if let Some(margin) = cli.margin {
        page = page.with_margin(margin);
    }
    let mut pdf = PdfConfig::new().with_compress(cli.compress);
    if let Some(title) = &cli.title {
        pdf = pdf.with_title(title);
    }
    let mut config = ExportConfig::new()
        .with_page(page)
        .with_pdf(pdf)
        .with_stylesheet(stylesheet)
        .with_strict(cli.strict);
    if let Some(copyright) = cli.copyright {
        config = config.with_copyright(copyright);
    }

    match export_with_config(&sections, mascot.as_deref(), Some(&cli.output), &config) {
        Ok(path) => {
            println!("{}", path.display());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn print_intro() {
    println!(
        r#"Investor Summary - one page per section, straight to PDF

USAGE:
    investor-summary [OPTIONS] [DECK]
    cat deck.json | investor-summary -o deck.pdf

OPTIONS:
    -o, --output       Output PDF path (default: {default})
    -s, --stylesheet   Custom color palette (TOML file)
    -m, --mascot       Image for the magic page (PNG, JPEG or data URL)
    --strict           Fail on empty fields or more than one recommended option
    --copyright        Footer text
    --title            PDF document title
    --margin           Page margin in mm (default: 20)
    --compress         Compress page content streams
    --sample           Print a sample deck
    -v, -vv            More logging (RUST_LOG overrides)
    -h, --help         Print help

QUICK START:
    investor-summary --sample > deck.json
    investor-summary deck.json -o deck.pdf"#,
        default = DEFAULT_FILENAME
    );
}
