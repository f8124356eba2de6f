use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "issues-cli")]
#[command(about = "Management CLI for the Local Issue Reporting Service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:5001")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report a new issue
    Create {
        title: String,
        description: String,
        location: String,
    },
    /// List all reported issues
    List,
    /// Fetch a single issue by id
    Get { id: String },
    /// Update fields of an existing issue
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        location: Option<String>,
    },
    /// Delete an issue by id
    Delete { id: String },
    /// Check service and store health
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Create {
            title,
            description,
            location,
        } => {
            let res = client
                .post(format!("{}/Issues", cli.url))
                .json(&json!({
                    "title": title,
                    "description": description,
                    "location": location,
                }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::List => {
            let res = client.get(format!("{}/Issues", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Get { id } => {
            let res = client
                .get(format!("{}/Issues/{}", cli.url, id))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Update {
            id,
            title,
            description,
            location,
        } => {
            let mut body = serde_json::Map::new();
            if let Some(title) = title {
                body.insert("title".into(), Value::String(title));
            }
            if let Some(description) = description {
                body.insert("description".into(), Value::String(description));
            }
            if let Some(location) = location {
                body.insert("location".into(), Value::String(location));
            }
            let res = client
                .put(format!("{}/Issues/{}", cli.url, id))
                .json(&Value::Object(body))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Delete { id } => {
            let res = client
                .delete(format!("{}/Issues/{}", cli.url, id))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Health => {
            let res = client.get(format!("{}/health", cli.url)).send().await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let body: Value = res.json().await.unwrap_or(Value::Null);
    println!("{}", status);
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}
