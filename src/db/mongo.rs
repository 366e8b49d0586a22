use mongodb::{
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client,
};
use std::sync::Arc;
use std::time::Duration;

/// Builds the shared client. A failed ping is logged, not fatal: the driver
/// reconnects lazily and only trip routes depend on the database.
pub async fn create_mongo_client(uri: &str, database: &str) -> mongodb::error::Result<Arc<Client>> {
    let mut client_options = ClientOptions::parse(uri).await?;

    client_options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
    client_options.connect_timeout = Some(Duration::from_secs(10));
    client_options.server_selection_timeout = Some(Duration::from_secs(10));
    client_options.max_pool_size = Some(10);
    client_options.min_pool_size = Some(1);

    let server_api = ServerApi::builder().version(ServerApiVersion::V1).build();
    client_options.server_api = Some(server_api);

    let client = Client::with_options(client_options)?;

    match client
        .database(database)
        .run_command(mongodb::bson::doc! {"ping": 1})
        .await
    {
        Ok(_) => log::info!("connected to MongoDB: database={}", database),
        Err(err) => log::warn!(
            "MongoDB ping failed, trip storage may be unavailable: database={}, err={}",
            database,
            err
        ),
    }

    Ok(Arc::new(client))
}
