use anyhow::Result;
use clap::builder::FalseyValueParser;
use clap::{ArgAction, Args, Parser, Subcommand};
use docdiff::areas::extraction::{CommandExtractor, DocumentExtractor};
use docdiff::areas::workbench::Workbench;
use docdiff::artifacts::alignment::Side;
use docdiff::artifacts::comparison::Comparator;
use docdiff::artifacts::core::{PagerWriter, should_color, should_page};
use docdiff::artifacts::diff::DiffEngine;
use docdiff::artifacts::normalize::CompareOptions;
use minus::Pager;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "docdiff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Compare two documents side by side",
    long_about = "This tool compares two Markdown or PDF documents, highlighting \
    additions and deletions and aligning the lines of both documents. \
    PDF text is obtained through an external extraction command.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Log more details to stderr (repeat for more)"
    )]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CompareArgs {
    #[arg(index = 1, help = "The original document")]
    left: PathBuf,
    #[arg(index = 2, help = "The modified document")]
    right: PathBuf,
    #[arg(
        short = 'w',
        long,
        env = "DOCDIFF_IGNORE_WHITESPACE",
        value_parser = FalseyValueParser::new(),
        help = "Treat every run of whitespace as a single space"
    )]
    ignore_whitespace: bool,
    #[arg(
        short = 'i',
        long,
        env = "DOCDIFF_IGNORE_CASE",
        value_parser = FalseyValueParser::new(),
        help = "Ignore differences in letter case"
    )]
    ignore_case: bool,
    #[arg(
        long,
        env = "DOCDIFF_TIMEOUT",
        value_name = "SECS",
        default_value_t = 10,
        help = "Time budget for the diff in seconds, 0 for none"
    )]
    timeout: u64,
    #[arg(
        long = "extract-with",
        env = "DOCDIFF_EXTRACTOR",
        value_name = "CMD",
        help = "Command that reads a PDF on stdin and prints its text, e.g. 'pdftotext - -'"
    )]
    extract_with: Option<String>,
}

impl CompareArgs {
    fn workbench(&self, writer: Box<dyn Write>) -> Result<Workbench> {
        let options = CompareOptions {
            ignore_whitespace: self.ignore_whitespace,
            ignore_case: self.ignore_case,
        };
        let timeout = (self.timeout > 0).then(|| Duration::from_secs(self.timeout));
        let extractor = match &self.extract_with {
            Some(command_line) => DocumentExtractor::new(Some(CommandExtractor::parse(command_line)?)),
            None => DocumentExtractor::default(),
        };

        Ok(Workbench::new(
            Comparator::new(options, DiffEngine::new(timeout)),
            extractor,
            writer,
        ))
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "diff",
        about = "Show the differences inline",
        long_about = "This command prints the original document with deleted text \
        and inserted text marked in place."
    )]
    Diff(CompareArgs),
    #[command(
        name = "lines",
        about = "Show one side line by line",
        long_about = "This command lists the lines of one document with their line numbers, \
        the aligned line in the other document and a +/- marker."
    )]
    Lines {
        #[command(flatten)]
        args: CompareArgs,
        #[arg(long, value_enum, default_value_t = Side::Left, help = "The document to list")]
        side: Side,
    },
    #[command(
        name = "html",
        about = "Render a side-by-side HTML page",
        long_about = "This command renders both documents side by side as a standalone HTML page \
        with deletions highlighted on the left and insertions on the right."
    )]
    Html {
        #[command(flatten)]
        args: CompareArgs,
        #[arg(short, long, help = "Write the page to this file instead of stdout")]
        output: Option<PathBuf>,
    },
    #[command(
        name = "stat",
        about = "Summarize the differences",
        long_about = "This command prints how many lines and characters were removed and added."
    )]
    Stat(CompareArgs),
    #[command(
        name = "json",
        about = "Print the comparison result as JSON",
        long_about = "This command prints the edits, aligned segments, HTML fragments and line map \
        as a JSON document."
    )]
    Json(CompareArgs),
}

impl Commands {
    fn args(&self) -> &CompareArgs {
        match self {
            Commands::Diff(args)
            | Commands::Stat(args)
            | Commands::Json(args)
            | Commands::Lines { args, .. }
            | Commands::Html { args, .. } => args,
        }
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let color = should_color();
    colored::control::set_override(color);

    let paging = should_page();
    let pager = Pager::new();
    let writer: Box<dyn Write> = if paging {
        Box::new(PagerWriter::new(pager.clone()))
    } else {
        Box::new(std::io::stdout())
    };

    let args = cli.command.args();
    let workbench = args.workbench(writer)?.with_color(color);

    match &cli.command {
        Commands::Diff(args) => workbench.diff(&args.left, &args.right).await?,
        Commands::Lines { args, side } => workbench.lines(&args.left, &args.right, *side).await?,
        Commands::Html { args, output } => {
            workbench
                .html(&args.left, &args.right, output.as_deref())
                .await?
        }
        Commands::Stat(args) => workbench.stat(&args.left, &args.right).await?,
        Commands::Json(args) => workbench.json(&args.left, &args.right).await?,
    }

    workbench.writer().flush()?;
    drop(workbench);

    if paging {
        minus::page_all(pager)?;
    }

    Ok(())
}
