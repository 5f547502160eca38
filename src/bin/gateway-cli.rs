use clap::{Parser, Subcommand};
use reqwest::Method;
use serde_json::Value;

#[derive(Parser)]
#[command(name = "gateway-cli")]
#[command(about = "Command-line client for the forwarding gateway", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:5000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check gateway health
    Health,
    /// Send a JSON object through the process-and-forward endpoint
    Process {
        /// JSON object, e.g. '{"x": 1}'
        json: String,
    },
    /// Forward a request to the upstream through /proxy
    Proxy {
        /// HTTP method (GET, POST, PUT, DELETE, PATCH)
        method: String,
        /// Upstream path, without the /proxy prefix
        path: String,
        /// Raw request body
        #[arg(short, long)]
        body: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::Health => client.get(format!("{}/health", base)).send().await?,
        Commands::Process { json } => {
            let payload: Value = serde_json::from_str(&json)?;
            client
                .post(format!("{}/api/process", base))
                .json(&payload)
                .send()
                .await?
        }
        Commands::Proxy { method, path, body } => {
            let method = Method::from_bytes(method.to_uppercase().as_bytes())?;
            let url = format!("{}/proxy/{}", base, path.trim_start_matches('/'));
            let mut req = client.request(method, url);
            if let Some(body) = body {
                req = req.body(body);
            }
            req.send().await?
        }
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    println!("Status: {}", status);

    let text = res.text().await?;
    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }

    if !status.is_success() {
        eprintln!("Error: gateway returned status {}", status);
    }
    Ok(())
}
