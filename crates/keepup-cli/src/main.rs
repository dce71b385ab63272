use std::process;

use clap::{Args, Parser, Subcommand};
use keepup_cli::{CliError, ViewOptions, dates, html, read_file, show};
use keepup_core::{CategoryFilter, Locale};

#[derive(Parser)]
#[command(
    name = "keepup-cli",
    version,
    about = "Preview keep-up-daily digest documents from the terminal"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a plain-text listing of a day document
    Show {
        /// Path to a `<date>.json` day document
        file: String,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Print the HTML fragment the reader would render for a day document
    Html {
        /// Path to a `<date>.json` day document
        file: String,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Print the normalized date list of an index document
    Dates {
        /// Path to `index.json`
        file: String,
    },
}

#[derive(Args)]
struct FilterArgs {
    /// Content language (en, pt)
    #[arg(long, default_value = "en", value_parser = parse_locale)]
    lang: Locale,

    /// Category tag, or `all`
    #[arg(long, default_value = "all")]
    category: String,

    /// Case-insensitive text to search for in titles and bodies
    #[arg(long, default_value = "")]
    query: String,

    /// Page number (1-based)
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Entries per page
    #[arg(long, default_value_t = 10)]
    per_page: usize,
}

impl From<FilterArgs> for ViewOptions {
    fn from(args: FilterArgs) -> Self {
        Self {
            locale: args.lang,
            category: CategoryFilter::parse(&args.category),
            query: args.query,
            page: args.page,
            per_page: args.per_page,
        }
    }
}

fn parse_locale(value: &str) -> Result<Locale, String> {
    Locale::parse(value).map_err(|e| e.to_string())
}

fn run(cli: Cli) -> Result<String, CliError> {
    match cli.command {
        Command::Show { file, filters } => show(&read_file(&file)?, &filters.into()),
        Command::Html { file, filters } => html(&read_file(&file)?, &filters.into()),
        Command::Dates { file } => dates(&read_file(&file)?),
    }
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(out) => print!("{}", out),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
