use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "contact-cli")]
#[command(about = "Command-line client for the contact relay", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    /// Send as this client (sets X-Forwarded-For)
    #[arg(long)]
    client: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a contact form
    Submit {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
        /// Fill the honeypot field
        #[arg(long)]
        company: Option<String>,
    },
    /// Check service health
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let request = match cli.command {
        Commands::Submit {
            name,
            email,
            message,
            company,
        } => {
            let mut body = json!({ "name": name, "email": email, "message": message });
            if let Some(company) = company {
                body["company"] = Value::String(company);
            }
            client.post(format!("{}/api/contact", cli.url)).json(&body)
        }
        Commands::Health => client.get(format!("{}/health", cli.url)),
    };

    let request = match cli.client {
        Some(ip) => request.header("x-forwarded-for", ip),
        None => request,
    };

    print_response(request.send().await?).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: relay returned status {}", status);
    } else {
        println!("Status: {}", status);
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}
