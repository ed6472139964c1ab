use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use eyre::Result;

use templatefox_client::batch::{self, BatchItem};
use templatefox_client::client::TemplateFoxClient;
use templatefox_client::schema;

#[derive(Parser)]
#[command(name = "templatefox", version, about = "Generate PDFs from TemplateFox templates")]
struct Cli {
    /// TemplateFox API key.
    #[arg(long, env = "TEMPLATEFOX_API_KEY", hide_env_values = true)]
    api_key: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the templates available to this API key.
    Templates,
    /// Show the resolved field schema for a template.
    Fields {
        /// Template identifier.
        template_id: String,
    },
    /// Run a batch of generation requests from a JSON file.
    Generate {
        /// Path to a JSON file holding an array of batch items.
        batch_file: PathBuf,
        /// Record failures per item and keep going instead of aborting.
        #[arg(long)]
        continue_on_fail: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let client = TemplateFoxClient::new(&cli.api_key)?;

    match cli.command {
        Command::Templates => list_templates(&client).await,
        Command::Fields { template_id } => show_fields(&client, &template_id).await,
        Command::Generate {
            batch_file,
            continue_on_fail,
        } => generate(&client, &batch_file, continue_on_fail).await,
    }
}

async fn list_templates(client: &TemplateFoxClient) -> Result<()> {
    let templates = client.list_templates().await?;
    for template in &templates {
        println!("{}  {}", template.id, template.name);
    }
    Ok(())
}

async fn show_fields(client: &TemplateFoxClient, template_id: &str) -> Result<()> {
    let fields = schema::resolved_fields(client, template_id).await;
    if fields.is_empty() {
        println!("no fields available for template {template_id}");
        return Ok(());
    }

    for field in &fields {
        let required = if field.required { " (required)" } else { "" };
        println!(
            "{}  [{}]{}  {}",
            field.key, field.kind, required, field.description
        );
    }
    Ok(())
}

async fn generate(client: &TemplateFoxClient, path: &Path, continue_on_fail: bool) -> Result<()> {
    let raw = std::fs::read_to_string(path)?;
    let items: Vec<BatchItem> = serde_json::from_str(&raw)?;

    match batch::run(client, &items, continue_on_fail).await {
        Ok(records) => {
            println!("{}", serde_json::to_string_pretty(&records)?);
            Ok(())
        }
        Err(abort) => {
            // Surface the work that completed before the failing item.
            if !abort.completed.is_empty() {
                println!("{}", serde_json::to_string_pretty(&abort.completed)?);
            }
            Err(eyre::eyre!("{abort}"))
        }
    }
}
