mod console;

use anyhow::Result;
use clap::Parser;
use slidesplit_common::{logger, AppConfig};
use slidesplit_llm::{DocumentSplitter, OpenAiClient};
use std::io::{self, Write};
use std::path::PathBuf;

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(root) = find_project_root() {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
        }
    }
}

#[derive(Parser)]
#[command(name = "slidesplit")]
#[command(about = "Split a markdown document into slides with a hosted chat model", long_about = None)]
struct Cli {
    /// Read the document from a file instead of standard input
    #[arg(long)]
    input: Option<PathBuf>,

    /// Number of slides; skips the interactive prompt
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=50))]
    slides: Option<u32>,

    /// Model identifier (overrides LLM_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// Chat-completion API base URL (overrides OPENAI_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    load_dotenv_from_project_root();

    let mut config = AppConfig::from_env()?;
    if let Some(model) = cli.model {
        config.llm_model = model;
    }
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    match &config.log_dir {
        Some(dir) => logger::setup_logging(dir, &config.log_level)?,
        None => logger::setup_console_logging(&config.log_level)?,
    }

    let client = OpenAiClient::from_config(&config)?;
    tracing::debug!("Configuration loaded: {:?}", config);

    let stdout = io::stdout();
    let stdin = io::stdin();

    let document = match &cli.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            println!("Welcome to the Document Splitter!");
            println!("\nPlease paste your markdown document below (press Ctrl+D or Ctrl+Z when finished):");
            console::read_document(stdin.lock())?
        }
    };

    let target_slides = match cli.slides {
        Some(n) => n,
        None => console::read_slide_count(stdin.lock(), stdout.lock())?,
    };

    println!("\nProcessing your document...");
    io::stdout().flush()?;

    let splitter = DocumentSplitter::new(client);
    match splitter.split_document(&document, target_slides).await {
        Ok(slides) => console::print_slides(stdout.lock(), &slides)?,
        Err(e) => {
            tracing::error!("Splitting failed: {}", e);
            println!("An error occurred: {}", e);
        }
    }

    Ok(())
}
