mod cli;
mod estimate;
mod infra;
mod routes;
mod server;

use psc_hours::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
