//! pdfpages CLI - print PDF text page by page

use std::io;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use colored::Colorize;

use pdfpages::{ErrorMode, OutputEncoding, PageTextPrinter, PrinterConfig, DEFAULT_INPUT_PATH};

#[derive(Parser)]
#[command(name = "pdfpages")]
#[command(version)]
#[command(about = "Print the text of every PDF page to standard output", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE", default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Output text encoding
    #[arg(long, value_enum, default_value = "utf-8")]
    encoding: Encoding,

    /// Print pages whose extraction fails with empty text instead of stopping
    #[arg(long)]
    keep_going: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Encoding {
    /// UTF-8 (default)
    #[value(name = "utf-8", alias = "utf8")]
    Utf8,
    /// ISO-8859-1
    #[value(alias = "iso-8859-1")]
    Latin1,
    /// US-ASCII
    Ascii,
}

impl From<Encoding> for OutputEncoding {
    fn from(encoding: Encoding) -> Self {
        match encoding {
            Encoding::Utf8 => OutputEncoding::Utf8,
            Encoding::Latin1 => OutputEncoding::Latin1,
            Encoding::Ascii => OutputEncoding::Ascii,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let error_mode = if cli.keep_going {
        ErrorMode::Lenient
    } else {
        ErrorMode::Strict
    };
    let config = PrinterConfig::new()
        .with_input_path(cli.input)
        .with_output_encoding(cli.encoding.into())
        .with_error_mode(error_mode);

    if let Err(e) = run(config) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(config: PrinterConfig) -> pdfpages::Result<()> {
    log::debug!("printing {}", config.input_path.display());

    let printer = PageTextPrinter::open(config)?;
    let mut stdout = io::stdout().lock();
    let pages = printer.print_to(&mut stdout)?;

    log::info!("printed {} pages", pages);
    Ok(())
}
