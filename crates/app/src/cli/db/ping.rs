use bikers_hub_app::database::{self, DEFAULT_DATABASE_NAME};
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct PingArgs {
    /// MongoDB connection string
    #[arg(long, env = "MONGODB_URI", hide_env_values = true)]
    mongodb_uri: String,

    /// Database name
    #[arg(long, env = "DB_NAME", default_value = DEFAULT_DATABASE_NAME)]
    db_name: String,
}

pub(crate) async fn run(args: PingArgs) -> Result<(), String> {
    let db = database::connect(&args.mongodb_uri, &args.db_name)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let collections = db
        .list_collection_names()
        .await
        .map_err(|error| format!("failed to list collections: {error}"))?;

    println!("connected to database: {}", db.name());
    println!("collections: {}", collections.join(", "));

    Ok(())
}
