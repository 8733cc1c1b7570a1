mod cli;
mod evaluate;
mod infra;
mod routes;
mod server;

use founder_fit::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
