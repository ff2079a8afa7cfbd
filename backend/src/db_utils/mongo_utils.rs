use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use tokio::sync::OnceCell;

use common::product::Product;

static MONGO_CLIENT: OnceCell<Client> = OnceCell::const_new();

/// Process-wide cached client. The first caller connects and pings; a dead
/// cluster fails here instead of being cached.
pub async fn get_mongo_client() -> anyhow::Result<&'static Client> {
    MONGO_CLIENT
        .get_or_try_init(|| async {
            let uri = std::env::var("MONGODB_URL")
                .unwrap_or("mongodb://localhost:27017".to_string());
            let options = ClientOptions::parse(&uri).await?;
            let client = Client::with_options(options)?;
            client
                .database("admin")
                .run_command(doc! { "ping": 1 }, None)
                .await?;
            Ok(client)
        })
        .await
}

pub async fn products_collection() -> anyhow::Result<Collection<Product>> {
    let client = get_mongo_client().await?;
    let database =
        std::env::var("MONGODB_DATABASE").unwrap_or("liftstore".to_string());
    Ok(client.database(&database).collection::<Product>("products"))
}
