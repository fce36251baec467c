use termii::{CreatePhonebook, TermiiClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = TermiiClient::from_env()?;
    let phonebooks = client.phonebooks();

    if let Ok(name) = std::env::var("TERMII_NEW_PHONEBOOK") {
        let created = phonebooks
            .create(CreatePhonebook::new(name)?.with_description("Created by the termii demo"))
            .await?;
        println!("create: {}", created.message);
    }

    let page = phonebooks.fetch_all().await?;
    for phonebook in &page.content {
        println!(
            "{} {} ({} contacts)",
            phonebook.id, phonebook.name, phonebook.total_number_of_contacts
        );
    }

    Ok(())
}
