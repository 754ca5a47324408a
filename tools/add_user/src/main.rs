use anyhow::Result;
use reqwest::Client;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod config;
mod enroll;
mod error;
mod prompt;
mod session;
#[cfg(test)]
mod test_support;

use crate::prompt::TerminalPrompter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging; stdout is reserved for the transcript
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let mut prompter = TerminalPrompter;
    let mut stdout = std::io::stdout();
    enroll::run(&mut prompter, &mut stdout, Client::builder()).await?;

    Ok(())
}
