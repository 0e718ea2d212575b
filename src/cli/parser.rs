use clap::{Parser, Subcommand};

/// Command-line interface definition for worklog
/// Web application to track working hours backed by SQLite
#[derive(Parser)]
#[command(
    name = "worklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small work-hours tracking web application: log in, record daily hours, submit corrections",
    long_about = None
)]
pub struct Cli {
    /// Override credentials database path (useful for tests or custom DB)
    #[arg(global = true, long = "users-db")]
    pub users_db: Option<String>,

    /// Override work-records database path (useful for tests or custom DB)
    #[arg(global = true, long = "records-db")]
    pub records_db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the databases and configuration
    Init,

    /// Create an account (admin operation; accounts are never created in-app)
    AddUser {
        /// Username for the new account
        username: String,

        /// Plaintext password; stored only as a salted hash
        password: String,
    },

    /// Run the HTTP server
    Serve {
        /// Bind address (defaults to the configured one)
        #[arg(long = "bind", help = "Address to bind the HTTP server to")]
        bind: Option<String>,

        /// Port (defaults to the configured one)
        #[arg(long = "port", help = "Port to listen on")]
        port: Option<u16>,
    },
}
