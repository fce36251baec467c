use termii::{FetchSenderIds, SenderIdStatus, TermiiClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let status = match std::env::var("TERMII_SENDER_STATUS") {
        Ok(value) => Some(
            SenderIdStatus::from_wire(&value)
                .ok_or_else(|| format!("unknown sender id status: {value}"))?,
        ),
        Err(_) => None,
    };

    let client = TermiiClient::from_env()?;
    let page = client
        .sender_ids()
        .fetch(FetchSenderIds {
            status,
            ..FetchSenderIds::default()
        })
        .await?;

    println!("{} sender ids", page.total_elements);
    for entry in &page.content {
        println!(
            "{:<12} {:<10} {}",
            entry.sender_id,
            entry.status,
            entry.company.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}
