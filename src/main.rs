use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quest_rag::config::TOKEN_ENV;
use quest_rag::loader::{self, PREVIEW_CHARS};
use quest_rag::web::{self, AppState};
use quest_rag::{
    AppConfig, Embedder, EmbeddingClient, EmbeddingModelInfo, LatexTextSplitter,
    RecursiveSplitter, VectorStore, SAMPLE_LATEX_DOCUMENT,
};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "quest-rag",
    version,
    about = "Quest Analytics RAG Assistant: load, split, embed, retrieve and answer"
)]
struct Cli {
    /// Config file (defaults to ./quest-rag.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Split LaTeX source at sectioning commands
    Split {
        /// LaTeX file; the built-in sample article is used when omitted
        file: Option<PathBuf>,
        /// Target characters per chunk
        #[arg(long)]
        size: Option<usize>,
        /// Overlap between chunks (accepted, not applied)
        #[arg(long)]
        overlap: Option<usize>,
        /// Print the chunks as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Load a PDF or text file and preview it
    Load { file: PathBuf },
    /// Embed a piece of text
    Embed { text: String },
    /// Index a file and run a similarity search
    Search {
        file: PathBuf,
        query: String,
        #[arg(short, default_value = "5")]
        k: usize,
    },
    /// Index a file and fetch documents through a retriever
    Retrieve {
        file: PathBuf,
        query: String,
        #[arg(short, default_value = "2")]
        k: usize,
    },
    /// Launch the QA bot web form
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Run every step in order, skipping inputs that do not exist
    Demo {
        /// PDF used for the loading step
        #[arg(long)]
        pdf: Option<PathBuf>,
        /// Text file used for the search and retrieval steps
        #[arg(long)]
        policies: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "quest_rag=debug,tower_http=debug"
    } else {
        "quest_rag=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Command::Split {
            file,
            size,
            overlap,
            json,
        } => {
            let text = match &file {
                Some(path) => std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                None => SAMPLE_LATEX_DOCUMENT.to_string(),
            };
            let splitter = LatexTextSplitter::new(
                size.unwrap_or(config.chunker.chunk_size),
                overlap.unwrap_or(config.chunker.chunk_overlap),
            );
            anyhow::ensure!(splitter.chunk_size() > 0, "--size must be greater than zero");
            run_split(&splitter, &text, json)?;
        }
        Command::Load { file } => run_load(&file)?,
        Command::Embed { text } => run_embed(&config, &text).await?,
        Command::Search { file, query, k } => run_search(&config, &file, &query, k).await?,
        Command::Retrieve { file, query, k } => run_retrieve(&config, &file, &query, k).await?,
        Command::Serve { host, port } => {
            let mut config = config;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            run_serve(config).await?;
        }
        Command::Demo { pdf, policies } => run_demo(config, pdf, policies).await?,
    }

    Ok(())
}

fn run_split(splitter: &LatexTextSplitter, text: &str, json: bool) -> Result<()> {
    let splits = splitter.split_text(text);

    if json {
        println!("{}", serde_json::to_string_pretty(&splits)?);
        return Ok(());
    }

    println!("Text splitting results:");
    for (i, split) in splits.iter().enumerate() {
        println!("Split {}: {}\n", i + 1, split);
    }
    println!("LaTeX text split into {} chunks", splits.len());
    Ok(())
}

fn run_load(file: &Path) -> Result<()> {
    let documents = loader::load_path(file)?;

    println!("First {} characters of the document:", PREVIEW_CHARS);
    println!("{}", loader::preview(&documents, PREVIEW_CHARS));
    println!(
        "Document loaded successfully with {} pages/chunks",
        documents.len()
    );
    Ok(())
}

fn embedding_client(config: &AppConfig) -> EmbeddingClient {
    EmbeddingClient::new(
        config.embedding.endpoint.clone(),
        EmbeddingModelInfo::from(&config.embedding),
    )
}

async fn run_embed(config: &AppConfig, text: &str) -> Result<()> {
    let client = embedding_client(config);
    let embedding = client
        .embed_query(text)
        .await
        .with_context(|| {
            format!(
                "Embedding failed (is the server at {} running?)",
                client.endpoint()
            )
        })?;

    println!("Query: \"{}\"", text);
    println!("Embedding dimension: {}", embedding.len());
    println!(
        "First 5 embedding values: {:?}",
        &embedding[..embedding.len().min(5)]
    );
    Ok(())
}

async fn build_store(config: &AppConfig, file: &Path) -> Result<VectorStore<EmbeddingClient>> {
    let documents = loader::load_path(file)?;
    let splitter = RecursiveSplitter::from_config(&config.splitter)?;
    let splits = splitter.split_documents(&documents);

    VectorStore::from_documents(splits, embedding_client(config))
        .await
        .context("Failed to build vector store")
}

fn print_results(query: &str, documents: &[quest_rag::Document]) {
    println!("Top {} results for query: '{}'", documents.len(), query);
    for (i, doc) in documents.iter().enumerate() {
        let head: String = doc.page_content.chars().take(100).collect();
        println!("Result {}: {}...\n", i + 1, head);
    }
}

async fn run_search(config: &AppConfig, file: &Path, query: &str, k: usize) -> Result<()> {
    let store = build_store(config, file).await?;
    let results = store.similarity_search(query, k).await?;

    print_results(query, &results);
    println!(
        "Vector database created successfully with {} documents",
        store.count()
    );
    Ok(())
}

async fn run_retrieve(config: &AppConfig, file: &Path, query: &str, k: usize) -> Result<()> {
    let store = build_store(config, file).await?;
    let retriever = store.as_retriever(k);
    let results = retriever.get_relevant_documents(query).await?;

    print_results(query, &results);
    println!("Retriever created successfully");
    Ok(())
}

async fn run_serve(config: AppConfig) -> Result<()> {
    let token = std::env::var(TOKEN_ENV).ok().filter(|t| !t.trim().is_empty());
    anyhow::ensure!(
        token.is_some(),
        "{} not found in environment variables. The application cannot start without it.",
        TOKEN_ENV
    );
    println!(
        "IMPORTANT: Make sure your HF account has accepted the terms for {}",
        config.llm.model
    );

    web::serve(AppState { config, token })
        .await
        .context("QA bot server failed")
}

async fn run_demo(
    config: AppConfig,
    pdf: Option<PathBuf>,
    policies: Option<PathBuf>,
) -> Result<()> {
    let start_time = Instant::now();
    println!("Quest Analytics RAG Assistant");
    println!("{}", "-".repeat(30));

    println!("\nStep 1: Document Loading");
    match pdf.as_deref() {
        Some(path) if path.exists() => run_load(path)?,
        Some(path) => println!("PDF file not found at path: {}", path.display()),
        None => println!("No PDF given, skipping (use --pdf)"),
    }

    println!("\nStep 2: Text Splitting");
    let step_start = Instant::now();
    let splits = LatexTextSplitter::from(&config.chunker).split_text(SAMPLE_LATEX_DOCUMENT);
    println!(
        "LaTeX text split into {} chunks [{:.3}s]",
        splits.len(),
        step_start.elapsed().as_secs_f64()
    );

    println!("\nStep 3: Document Embedding");
    let query = "How are you?";
    match embedding_client(&config).embed_query(query).await {
        Ok(embedding) => {
            println!("Embedding successful for query: '{}'", query);
            println!("Total embedding dimensions: {}", embedding.len());
            println!(
                "First 5 embedding values: {:?}",
                &embedding[..embedding.len().min(5)]
            );
        }
        Err(e) => {
            warn!(error = %e, "embedding step failed");
            println!("Embedding skipped or failed (check the embedding server).");
        }
    }

    println!("\nStep 4: Vector Database Creation");
    match policies.as_deref() {
        Some(path) if path.exists() => {
            if let Err(e) = run_search(&config, path, "Smoking policy", 5).await {
                println!("Vector database step failed: {:#}", e);
            }

            println!("\nStep 5: Retriever Development");
            if let Err(e) = run_retrieve(&config, path, "Email policy", 2).await {
                println!("Retriever step failed: {:#}", e);
            }
        }
        Some(path) => println!("Policy file not found at path: {}", path.display()),
        None => println!("No policy file given, skipping steps 4 and 5 (use --policies)"),
    }

    println!("\nStep 6: QA Bot");
    println!("Run `quest-rag serve` to launch the QA bot interface.");

    println!(
        "\nTotal execution:      {:.3}s",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}
