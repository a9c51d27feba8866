use crate::config::{DEFAULT_CONFIG_FILE, DEFAULT_ENVIRONMENT};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "petshop")]
#[command(author, version, about = "A GraphQL API for owners and their pets")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the environment-keyed config file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Configuration block to use
    #[arg(
        long = "env",
        global = true,
        env = "PETSHOP_ENV",
        default_value = DEFAULT_ENVIRONMENT
    )]
    pub environment: String,

    /// Database URL (overrides the config block)
    #[arg(long, global = true, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a config file with development, test and production blocks
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Start the GraphQL HTTP server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value_t = 4000)]
        port: u16,
    },

    /// Execute a GraphQL query and print the JSON response
    #[command(visible_alias = "q")]
    Query {
        /// GraphQL document, e.g. '{ owners { name } }'
        document: String,

        /// Variables as a JSON object
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute mutation fields (wrapped in `mutation { }`) and print the JSON response
    #[command(visible_alias = "m")]
    Mutate {
        /// Mutation fields, e.g. 'addOwner(name: "Ann", age: 30) { id }'
        mutation: String,

        /// Variables as a JSON object
        #[arg(long)]
        variables: Option<String>,
    },

    /// Apply pending database migrations
    Migrate,

    /// Insert a demo owner with two pets
    Seed,

    /// Print the GraphQL schema (SDL)
    Schema,
}
