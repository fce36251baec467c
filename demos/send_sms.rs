use std::io;

use termii::{
    Channel, MessageText, MessageType, PhoneNumber, SendMessage, SenderId, TermiiClient,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let phone_raw = std::env::var("TERMII_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TERMII_PHONE environment variable is required",
        )
    })?;
    let sender = std::env::var("TERMII_SENDER_ID").unwrap_or_else(|_| "Termii".to_owned());
    let message = std::env::var("TERMII_MESSAGE")
        .unwrap_or_else(|_| "Hello from the termii demo.".to_owned());

    let client = TermiiClient::from_env()?;
    let request = SendMessage::text(
        PhoneNumber::new(phone_raw)?,
        SenderId::new(sender)?,
        MessageText::new(message)?,
        Channel::Generic,
        MessageType::Plain,
    );

    let sent = client.messaging().send(request).await?;
    println!(
        "message_id: {}, message: {}, balance: {}",
        sent.message_id,
        sent.message,
        sent.balance.as_str()
    );

    Ok(())
}
