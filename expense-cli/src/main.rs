//! Expense CLI
//!
//! Command-line interface for the expense relay API, plus a UPI QR
//! code generator and a local stand-in for the extraction webhook.

mod qr;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::{Value, json};

use expense_client::ExpenseClient;

use qr::UpiPayment;

#[derive(Parser)]
#[command(name = "expense")]
#[command(author, version, about = "Expense relay CLI client", long_about = None)]
struct Cli {
    /// Base URL of the expense relay API
    #[arg(long, env = "EXPENSE_API_URL", default_value = "http://localhost:8000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a transaction message for extraction
    Process {
        /// Free-text description, e.g. "lunch 100 split with Bob"
        message: String,
        /// Print only the HTML summary
        #[arg(long)]
        html: bool,
    },
    /// Check API health
    Health,
    /// Write a UPI payment QR code image
    Qr {
        /// Payee UPI ID
        #[arg(long, default_value = qr::DEFAULT_PAYEE_ID)]
        payee_id: String,
        /// Payee display name
        #[arg(long, default_value = qr::DEFAULT_PAYEE_NAME)]
        payee_name: String,
        /// Amount in INR
        #[arg(long, default_value_t = qr::DEFAULT_AMOUNT)]
        amount: f64,
        /// Output PNG path
        #[arg(long, default_value = qr::DEFAULT_OUTPUT)]
        output: PathBuf,
    },
    /// Run a local extraction webhook that answers every prompt with a canned result
    StubWebhook {
        /// Port to listen on
        #[arg(long, default_value = "5678")]
        port: u16,
        /// Label of the canned reply (a split between Alice and Bob)
        #[arg(long, default_value = "lunch", conflicts_with = "reply")]
        label: String,
        /// JSON file with the full reply body, instead of the canned one
        #[arg(long)]
        reply: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let client = ExpenseClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Process { message, html } => {
            let response = client.process(&message).await?;
            if html {
                println!("{}", response.output);
            } else {
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
        }

        Commands::Qr {
            payee_id,
            payee_name,
            amount,
            output,
        } => {
            let link = qr::upi_link(&UpiPayment {
                payee_id,
                payee_name,
                amount,
            });
            qr::write_qr_png(&link, &output)?;
            println!("✓ Wrote {} for {}", output.display(), link);
        }

        Commands::StubWebhook { port, label, reply } => {
            let reply = stub_reply(&label, reply.as_deref())?;
            let app = axum::Router::new()
                .route("/webhook", axum::routing::post(handle_prompt))
                .with_state(reply);
            let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));
            println!("Stub extraction webhook on http://{}/webhook", addr);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}

/// Body the stub webhook answers with: the file's JSON, or a canned split.
fn stub_reply(label: &str, file: Option<&Path>) -> Result<Value> {
    match file {
        Some(path) => Ok(serde_json::from_str(&std::fs::read_to_string(path)?)?),
        None => Ok(canned_reply(label)),
    }
}

fn canned_reply(label: &str) -> Value {
    json!({
        "label": label,
        "Lenders": [{ "name": "Alice", "amountLent": 100 }],
        "Borrowers": [{ "name": "Bob", "amountBorrowed": 50 }]
    })
}

async fn handle_prompt(
    axum::extract::State(reply): axum::extract::State<Value>,
    axum::Json(body): axum::Json<Value>,
) -> axum::Json<Value> {
    println!("POST /webhook");
    println!("{}", body["prompt"].as_str().unwrap_or_default().trim());
    println!("----------------------------------------");
    axum::Json(reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canned_reply_uses_label() {
        let reply = stub_reply("groceries", None).unwrap();
        assert_eq!(reply["label"], "groceries");
        assert_eq!(reply["Lenders"][0]["name"], "Alice");
        assert_eq!(reply["Borrowers"][0]["name"], "Bob");
    }

    #[test]
    fn test_reply_file_overrides_canned() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reply.json");
        std::fs::write(&path, r#"{"error": "workflow inactive"}"#).unwrap();

        let reply = stub_reply("ignored", Some(&path)).unwrap();
        assert_eq!(reply, json!({ "error": "workflow inactive" }));
    }

    #[test]
    fn test_label_and_reply_conflict() {
        let parsed = Cli::try_parse_from([
            "expense",
            "stub-webhook",
            "--label",
            "x",
            "--reply",
            "r.json",
        ]);
        assert!(parsed.is_err());
    }
}
