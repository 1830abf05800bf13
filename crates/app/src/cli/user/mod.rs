use clap::{Args, Subcommand};

mod grant_admin;

#[derive(Debug, Args)]
pub(crate) struct UserCommand {
    #[command(subcommand)]
    command: UserSubcommand,
}

#[derive(Debug, Subcommand)]
enum UserSubcommand {
    GrantAdmin(grant_admin::GrantAdminArgs),
}

pub(crate) async fn run(command: UserCommand) -> Result<(), String> {
    match command.command {
        UserSubcommand::GrantAdmin(args) => grant_admin::run(args).await,
    }
}
