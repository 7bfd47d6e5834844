mod calculate;
mod cli;
mod infra;
mod routes;
mod server;

use carbon_tax::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
