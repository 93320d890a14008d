use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    status_server::run().await
}
