//! Command-line interface for the I Perform console.

pub mod shell;
pub mod summary;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use iperform_config::GatewayConfig;
use iperform_gateway::{InferenceClient, SeedRequest, StateSynthesizer, fallback_state};
use iperform_store::session::default_password;

#[derive(Parser)]
#[command(name = "iperform")]
#[command(about = "I Perform - AI-backed school management console", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive session against the inference service
    Run {
        /// Register a new school with this name instead of loading demo data
        #[arg(short, long)]
        school: Option<String>,
    },
    /// Materialize a State document and print it as JSON
    Materialize {
        /// Optional school name to seed generation with
        #[arg(short, long)]
        school: Option<String>,

        /// Write the document to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Print the built-in demo dataset and its credentials (offline)
    Demo,
}

pub async fn execute(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Run { school } => shell::run(school).await,
        Commands::Materialize { school, out } => materialize(school, out).await,
        Commands::Demo => {
            demo();
            Ok(())
        }
    }
}

async fn materialize(school: Option<String>, out: Option<PathBuf>) -> anyhow::Result<()> {
    let client = InferenceClient::new(GatewayConfig::from_env())
        .context("failed to build inference client")?;
    let seed = school.map(SeedRequest::named);

    let state = client
        .materialize(seed.as_ref())
        .await
        .context("failed to materialize state")?;
    let document = serde_json::to_string_pretty(&state)?;

    match out {
        Some(path) => {
            std::fs::write(&path, document)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("✅ State written to {}", path.display());
        }
        None => println!("{}", document),
    }
    Ok(())
}

fn demo() {
    let state = fallback_state(None);

    println!("🏫 {} ({})", state.school_profile.name, state.school_profile.code);
    println!("   {}", state.school_profile.motto);
    println!();
    println!(
        "   {} users, {} students, {} classes, {} books",
        state.users.len(),
        state.students.len(),
        state.classes.len(),
        state.books.len()
    );
    println!();
    println!("Demo credentials:");
    for user in &state.users {
        let password = user
            .password
            .as_deref()
            .or_else(|| default_password(&user.role))
            .unwrap_or("-");
        println!("   {:<12} {:<12} ({})", user.username, password, user.role);
    }
    println!();
    println!("Start an interactive session with: iperform run");
}

/// Builds the shared gateway client and wires it into a store.
pub(crate) fn build_gateway() -> anyhow::Result<Arc<InferenceClient>> {
    let config = GatewayConfig::from_env();
    if config.api_key.is_empty() {
        eprintln!(
            "⚠️  No INFERENCE_API_KEY set; generation will fall back to the built-in demo dataset."
        );
    }
    Ok(Arc::new(
        InferenceClient::new(config).context("failed to build inference client")?,
    ))
}
