//! Manual smoke checks against a running warelay instance.
//!
//! Runs four checks end to end: configuration verification, a text send, a
//! media send, and one deliberately invalid recipient that must come back as
//! a validation failure. Exits non-zero when any check fails.

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde_json::{Value, json};

const TEST_IMAGE_URL: &str = "https://picsum.photos/1200/800.jpg";

#[derive(Parser)]
#[command(name = "warelay-smoke", about = "Send canned requests against a running warelay instance")]
struct Args {
    /// Base URL of the running service.
    #[arg(long, default_value = "http://localhost:8000")]
    base_url: String,

    /// Recipient number without the whatsapp: prefix, e.g. +254716160370.
    #[arg(long)]
    to: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let runner = Runner {
        client: reqwest::Client::new(),
        base_url: args.base_url.trim_end_matches('/').to_string(),
    };

    let results = [
        ("configuration", runner.check_config().await),
        ("send text message", runner.check_send_text(&args.to).await),
        ("send media message", runner.check_send_media(&args.to).await),
        (
            "invalid recipient rejected",
            runner.check_invalid_recipient().await,
        ),
    ];

    println!();
    let mut passed = 0usize;
    for (name, result) in &results {
        match result {
            Ok(detail) => {
                passed += 1;
                println!("PASS {name}: {detail}");
            }
            Err(e) => println!("FAIL {name}: {e:#}"),
        }
    }
    println!("\n{passed}/{} checks passed", results.len());

    if passed < results.len() {
        std::process::exit(1);
    }
    Ok(())
}

struct Runner {
    client: reqwest::Client,
    base_url: String,
}

impl Runner {
    async fn check_config(&self) -> Result<String> {
        let url = format!("{}/verify-config", self.base_url);
        println!("GET {url}");
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body: Value = response.json().await.context("response was not JSON")?;
        println!("{}", serde_json::to_string_pretty(&body)?);
        if !status.is_success() {
            bail!("expected 200, got {status}");
        }
        Ok(format!(
            "account {} is {}",
            body["account_sid"].as_str().unwrap_or("?"),
            body["account_status"].as_str().unwrap_or("?")
        ))
    }

    async fn check_send_text(&self, to: &str) -> Result<String> {
        let payload = json!({
            "to": format!("whatsapp:{to}"),
            "body": "Hello from Twilio WhatsApp API Test",
        });
        let body = self.post_send(&payload).await?;
        Ok(format!(
            "message sid {}",
            body["message_sid"].as_str().unwrap_or("?")
        ))
    }

    async fn check_send_media(&self, to: &str) -> Result<String> {
        let payload = json!({
            "to": format!("whatsapp:{to}"),
            "body": "Check out this test image!",
            "media_url": [TEST_IMAGE_URL],
        });
        let body = self.post_send(&payload).await?;
        Ok(format!(
            "message sid {} with {} media",
            body["message_sid"].as_str().unwrap_or("?"),
            body["num_media"]
        ))
    }

    async fn check_invalid_recipient(&self) -> Result<String> {
        let url = format!("{}/send-whatsapp/", self.base_url);
        // Missing the whatsapp: prefix on purpose.
        let payload = json!({
            "to": "+254716160370",
            "body": "This should fail validation",
        });
        println!("\nPOST {url} (expecting 422)");
        let response = self.client.post(&url).json(&payload).send().await?;
        let status = response.status();
        let body: Value = response.json().await.context("response was not JSON")?;
        println!("{}", serde_json::to_string_pretty(&body)?);
        if status.as_u16() != 422 {
            bail!("expected 422, got {status}");
        }
        Ok("validation error as expected".to_string())
    }

    async fn post_send(&self, payload: &Value) -> Result<Value> {
        let url = format!("{}/send-whatsapp/", self.base_url);
        println!("\nPOST {url}");
        println!("{}", serde_json::to_string_pretty(payload)?);
        let response = self.client.post(&url).json(payload).send().await?;
        let status = response.status();
        let body: Value = response.json().await.context("response was not JSON")?;
        println!("{}", serde_json::to_string_pretty(&body)?);
        if !status.is_success() {
            bail!("expected 200, got {status}: {}", body["detail"]);
        }
        Ok(body)
    }
}
