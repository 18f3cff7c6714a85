use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "erp-cli")]
#[command(about = "Command-line client for the ERP mock API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check service health
    Health,
    /// Log in and print the issued token
    Login {
        #[arg(long, default_value = "admin@erp.com")]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Show dashboard aggregates
    Stats,
    /// List clients
    Clients,
    /// Check a user's subscription
    Subscription {
        user_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::Health => client.get(format!("{}/health", base)).send().await?,
        Commands::Login { email, password } => {
            client
                .post(format!("{}/api/auth/login", base))
                .json(&json!({ "email": email, "password": password }))
                .send()
                .await?
        }
        Commands::Stats => client.get(format!("{}/api/dashboard/stats", base)).send().await?,
        Commands::Clients => client.get(format!("{}/api/clients", base)).send().await?,
        Commands::Subscription { user_id } => {
            client
                .get(format!("{}/api/subscriptions/check/{}", base, user_id))
                .send()
                .await?
        }
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    let rendered = match serde_json::from_str::<Value>(&text) {
        Ok(json) => serde_json::to_string_pretty(&json)?,
        Err(_) => text,
    };

    if status.is_success() {
        println!("{}", rendered);
    } else {
        eprintln!("Error: API returned status {}", status);
        eprintln!("{}", rendered);
    }
    Ok(())
}
