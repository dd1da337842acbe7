mod cli;
mod commands;
mod demo;
mod infra;
mod render;
mod routes;
mod server;

use std::process::ExitCode;

use profile_quiz::error::AppError;

pub async fn run() -> Result<ExitCode, AppError> {
    cli::run().await
}
