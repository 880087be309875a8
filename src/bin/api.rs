//! Todo API server binary.
//!
//! This binary creates the concrete database implementation and passes it
//! to the API server. The API layer remains agnostic of the storage backend.

use std::net::IpAddr;

use clap::Parser;
use miette::Diagnostic;
use thiserror::Error;
use todo_api::api::{self, Config, ServeError};
use todo_api::db::{Database, DbError, SqliteDatabase};
use tracing::info;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(todo_api::binary::database))]
    Database(#[from] DbError),

    #[error("API server error: {0}")]
    #[diagnostic(code(todo_api::binary::api))]
    Api(#[from] ServeError),
}

#[derive(Parser)]
#[command(name = "todo-api")]
#[command(author, version, about = "Todo API server", long_about = None)]
struct Cli {
    /// Host address to bind to (overrides HOST, default 0.0.0.0)
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to listen on (overrides PORT, default 5000)
    #[arg(short, long)]
    port: Option<u16>,

    /// Database connection URL
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://todos.db")]
    database_url: String,
}

impl Cli {
    /// CLI flag > environment > default
    fn config(&self) -> Config {
        let mut config = Config::new();
        if let Some(host) = self.host {
            config = config.with_host(host);
        }
        if let Some(port) = self.port {
            config = config.with_port(port);
        }
        config
    }
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    api::init_tracing();

    serve(cli).await?;
    Ok(())
}

async fn serve(cli: Cli) -> Result<(), BinaryError> {
    info!(url = %cli.database_url, "opening database");
    let db = SqliteDatabase::open(&cli.database_url).await?;

    // Run migrations before starting the server
    db.migrate().await?;
    info!("database migrations complete");

    // Pass the abstract Database to the API layer
    api::run(cli.config(), db).await?;

    Ok(())
}
