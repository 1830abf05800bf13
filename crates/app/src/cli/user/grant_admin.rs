use bikers_hub_app::{
    database::{self, DEFAULT_DATABASE_NAME},
    domain::users::{MongoUsersService, UsersService},
};
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct GrantAdminArgs {
    /// Email of the user to promote
    #[arg(long)]
    email: String,

    /// MongoDB connection string
    #[arg(long, env = "MONGODB_URI", hide_env_values = true)]
    mongodb_uri: String,

    /// Database name
    #[arg(long, env = "DB_NAME", default_value = DEFAULT_DATABASE_NAME)]
    db_name: String,
}

pub(crate) async fn run(args: GrantAdminArgs) -> Result<(), String> {
    if args.email.trim().is_empty() {
        return Err("email cannot be empty".to_string());
    }

    let db = database::connect(&args.mongodb_uri, &args.db_name)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let ack = MongoUsersService::new(&db)
        .grant_admin(&args.email)
        .await
        .map_err(|error| format!("failed to grant admin role: {error}"))?;

    if ack.matched_count == 0 {
        return Err(format!("no user with email {}", args.email));
    }

    println!("granted admin role: {}", args.email);

    Ok(())
}
