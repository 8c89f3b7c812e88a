use mongodb::{Client, options::ClientOptions};
use anyhow::{Result, Context};

use crate::config::APP_NAME;

pub async fn connect(uri: &str) -> Result<Client> {
    let mut options = ClientOptions::parse(uri)
        .await
        .context("Failed to parse MongoDB connection URI")?;

    options.app_name = Some(APP_NAME.into());

    let client = Client::with_options(options)
        .context("Failed to create MongoDB client with options")?;

    // The driver connects lazily; ping so an unreachable server fails here.
    if let Err(err) = ping(&client).await {
        client.shutdown().await;
        return Err(err);
    }

    Ok(client)
}

async fn ping(client: &Client) -> Result<()> {
    client
        .database("admin")
        .run_command(mongodb::bson::doc! {"ping": 1}, None)
        .await
        .context("Failed to ping MongoDB server - connection test failed")?;
    Ok(())
}
