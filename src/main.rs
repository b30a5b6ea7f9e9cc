use anyhow::Context;
use clap::{Parser, Subcommand};

/// Query the bundled Docy documentation from the command line.
#[derive(Debug, Parser)]
#[command(name = "docy", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every page as JSON
    Pages,
    /// Print one page as JSON
    Page {
        /// Page slug, e.g. `getting-started`
        slug: String,
    },
    /// Ask a question and print the answer with its sources
    Ask {
        /// Question words; joined with spaces
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Pages => {
            let pages = docy::list_pages();
            println!("{}", serde_json::to_string_pretty(&pages)?);
        }
        Command::Page { slug } => {
            let page = docy::get_page(&slug).with_context(|| format!("looking up {slug:?}"))?;
            println!("{}", serde_json::to_string_pretty(&page)?);
        }
        Command::Ask { question } => {
            let response = docy::ask(&question.join(" "));
            println!("{}", response.answer);
            for source in &response.sources {
                println!("  source: {source}");
            }
        }
    }

    Ok(())
}
