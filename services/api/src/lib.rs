//! CLI and HTTP front end for the career readiness engine.

mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use career_compass::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
