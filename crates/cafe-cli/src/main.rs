//! Console client for the café daemon.
//!
//! Replaces the legacy interactive console tool. All commands go through
//! the daemon's HTTP API, so the assignment and lifecycle semantics are
//! the canonical ones — there is no second policy implementation here.

use anyhow::{bail, Context, Result};
use cafe_core::Priority;
use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "cafe")]
#[command(about = "BrewBytes cafe console", long_about = None)]
struct Cli {
    /// Daemon base address (overrides CAFE_DAEMON_ADDR).
    #[arg(long)]
    addr: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check daemon liveness
    Health,

    /// Print the menu catalog
    Menu,

    /// Print all orders, priority-sorted
    Orders,

    /// Print the waiter roster with current workload
    Waiters,

    /// Place an order
    Order {
        /// Menu item id (1..=20)
        #[arg(long = "item-id")]
        item_id: u32,

        /// Priority (VIP | Regular | Online)
        #[arg(long)]
        priority: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env.local if present (dev convenience).
    let _ = dotenvy::from_filename(".env.local");

    let cli = Cli::parse();
    let base = base_url(cli.addr);
    let client = reqwest::Client::new();

    match cli.cmd {
        Commands::Health => {
            let v = get_json(&client, &format!("{base}/health")).await?;
            println!("ok={} service={} version={}", v["ok"], v["service"], v["version"]);
        }

        Commands::Menu => {
            let v = get_json(&client, &format!("{base}/menu")).await?;
            for item in v.as_array().context("menu response is not an array")? {
                println!(
                    "{:>2}. {} ({} min) [{}]",
                    item["id"],
                    item["name"].as_str().unwrap_or("?"),
                    item["prepTime"],
                    item["category"].as_str().unwrap_or("?"),
                );
            }
        }

        Commands::Orders => {
            let v = get_json(&client, &format!("{base}/orders")).await?;
            let orders = v.as_array().context("orders response is not an array")?;
            if orders.is_empty() {
                println!("no orders yet");
            }
            for o in orders {
                println!(
                    "{} {} priority={} waiter={} status={}",
                    o["id"].as_str().unwrap_or("?"),
                    o["itemName"].as_str().unwrap_or("?"),
                    o["priority"].as_str().unwrap_or("?"),
                    o["waiterName"].as_str().unwrap_or("?"),
                    o["status"].as_str().unwrap_or("?"),
                );
            }
        }

        Commands::Waiters => {
            let v = get_json(&client, &format!("{base}/waiters")).await?;
            for w in v.as_array().context("waiters response is not an array")? {
                println!(
                    "{}: occupied={} min current={} total={}",
                    w["name"].as_str().unwrap_or("?"),
                    w["occupiedTime"],
                    w["currentOrders"],
                    w["totalOrders"],
                );
            }
        }

        Commands::Order { item_id, priority } => {
            // Validate locally before the round-trip so typos fail fast.
            let priority: Priority = priority
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))?;

            let resp = client
                .post(format!("{base}/orders"))
                .json(&serde_json::json!({
                    "itemId": item_id,
                    "priority": priority.to_string(),
                }))
                .send()
                .await
                .context("daemon unreachable")?;

            if resp.status() == reqwest::StatusCode::NOT_FOUND {
                bail!("menu item {item_id} not found");
            }
            if !resp.status().is_success() {
                bail!("order failed: HTTP {}", resp.status());
            }

            let v: Value = resp.json().await.context("invalid response body")?;
            let order = &v["order"];
            println!(
                "placed={} item={} waiter={} eta={}",
                order["id"].as_str().unwrap_or("?"),
                order["itemName"].as_str().unwrap_or("?"),
                order["waiterName"].as_str().unwrap_or("?"),
                order["estimatedCompletion"].as_str().unwrap_or("?"),
            );
        }
    }

    Ok(())
}

fn base_url(flag: Option<String>) -> String {
    let addr = flag
        .or_else(|| std::env::var("CAFE_DAEMON_ADDR").ok())
        .unwrap_or_else(|| "127.0.0.1:8765".to_string());

    if addr.starts_with("http://") || addr.starts_with("https://") {
        addr.trim_end_matches('/').to_string()
    } else {
        format!("http://{addr}")
    }
}

async fn get_json(client: &reqwest::Client, url: &str) -> Result<Value> {
    let resp = client.get(url).send().await.context("daemon unreachable")?;
    if !resp.status().is_success() {
        bail!("request failed: HTTP {} ({url})", resp.status());
    }
    resp.json().await.context("invalid response body")
}
