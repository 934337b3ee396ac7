//! Example: Create a stream and delete it again
//!
//! Reads credentials from `UBERVU_EMAIL`, `UBERVU_API_KEY` and
//! `UBERVU_BASE_URL` (a `.env` file in the working directory also works).
//!
//! ```sh
//! RUST_LOG=ubervu=debug cargo run --example streams --features trace -- "tesla"
//! ```

use ubervu::{Client, observability};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    observability::init_tracing();

    let query = std::env::args().nth(1).unwrap_or_else(|| "tesla".to_string());
    let client = Client::from_env()?;

    let me = client.account().me().await?;
    println!("Default group: {}", me.group_id);

    let folders = client.folders().list(&me.group_id).await?;
    for folder in &folders {
        println!("  folder {} {:?} ({:?})", folder.id, folder.name, folder.context_type);
    }

    let stream = client.streams().create(&query).await?;
    println!("Created stream {} for {:?}", stream.id, stream.keyword.as_deref().unwrap_or(&query));

    let keywords = client.keywords().list(&me.group_id).await?;
    println!("Group now has {} keyword(s)", keywords.len());

    client.streams().delete(&query).await?;
    println!("Deleted stream for {:?}", query);

    Ok(())
}
