use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match career_compass_api::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("fatal: {err}");
            ExitCode::FAILURE
        }
    }
}
