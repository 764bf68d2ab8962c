//! Frigo - main entry point

mod cli;

use cli::CliApp;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        // Only warn if it's not a "file not found" error
        if !e.not_found() {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    let app = CliApp::new()?;
    let exit_code = app.run().await?;

    std::process::exit(exit_code);
}
