// Entrypoint for the CLI application.
// - Loads `.env`, sets up logging and captures today's date once.
// - Builds the API client from the environment and hands it to the UI.

use tracing_subscriber::EnvFilter;
use yt_comments_cli::{api::ApiClient, config, config::Config, ui};

fn main() -> anyhow::Result<()> {
    let dotenv_path = config::load_dotenv();

    // Log lines go through the spinner so they don't tear its line.
    let spinner = ui::spinner()?;
    let log_bar = spinner.clone();
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(move || ui::SuspendingWriter::new(log_bar.clone(), std::io::stderr()))
        .init();
    if let Some(path) = dotenv_path {
        tracing::debug!(path = %path.display(), "loaded environment file");
    }

    let today = chrono::Local::now().date_naive();
    let api = ApiClient::new(Config::from_env())?;

    ui::run(&api, today, &spinner)?;
    Ok(())
}
