use anyhow::Result;
use clap::Parser;

use petshop::cli::handlers::{self, CommandContext};
use petshop::cli::{Cli, Commands};
use petshop::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    let load_ctx =
        || CommandContext::load(&cli.config, &cli.environment, cli.database_url.clone());

    match &cli.command {
        Commands::Init { force } => handlers::handle_init(&cli.config, *force),
        Commands::Serve { host, port } => {
            handlers::handle_serve(load_ctx()?, host.clone(), *port)
        }
        Commands::Query {
            document,
            variables,
        } => handlers::handle_query(load_ctx()?, document.clone(), variables.clone()),
        Commands::Mutate {
            mutation,
            variables,
        } => handlers::handle_mutate(load_ctx()?, mutation.clone(), variables.clone()),
        Commands::Migrate => handlers::handle_migrate(load_ctx()?),
        Commands::Seed => handlers::handle_seed(load_ctx()?),
        Commands::Schema => handlers::handle_schema(),
    }
}
