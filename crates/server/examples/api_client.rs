//! Examples for using the Docy Server API

use reqwest::Client;
use serde_json::json;

const SERVER_URL: &str = "http://localhost:8000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = Client::new();

    // Example 1: Root status
    println!("1. Backend Status:");
    let resp = client.get(format!("{SERVER_URL}/")).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 2: List pages
    println!("2. List Pages:");
    let resp = client.get(format!("{SERVER_URL}/api/pages")).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 3: Get a single page
    println!("3. Get Page 'faq':");
    let resp = client
        .get(format!("{SERVER_URL}/api/pages/faq"))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 4: Unknown page
    println!("4. Get Unknown Page:");
    let resp = client
        .get(format!("{SERVER_URL}/api/pages/does-not-exist"))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 5: Ask a question
    println!("5. Ask a Question:");
    let resp = client
        .post(format!("{SERVER_URL}/api/ask"))
        .json(&json!({ "question": "How do I get started with writing docs?" }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 6: Database diagnostics
    println!("6. Database Diagnostics:");
    let resp = client.get(format!("{SERVER_URL}/test")).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 7: Prometheus metrics
    println!("7. Prometheus Metrics:");
    let resp = client.get(format!("{SERVER_URL}/metrics")).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    println!("All examples completed!");
    Ok(())
}
