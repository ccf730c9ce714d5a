mod cli;
mod commands;
mod infra;

use ranksewa::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
