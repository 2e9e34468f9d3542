use std::sync::Arc;

use morvo_client::app::App;
use morvo_client::config::{ClientConfig, DEFAULT_LOG_FILTER};
use morvo_client::remote::{HttpRemote, RemoteService};
use morvo_client::session::{FileStore, KeyValueStore};
use morvo_client::terminal::{self, TerminalView};
use morvo_client::view::View;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = ClientConfig::from_env()?;

    eprintln!("🤖 MORVO client v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Service: {}", config.base_url);
    eprintln!("   State: {}", config.state_path.display());
    eprintln!("   /back, /reset, /quit\n");

    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(&config.state_path).await?);
    let remote: Arc<dyn RemoteService> = Arc::new(HttpRemote::new(&config)?);
    let view: Arc<dyn View> = Arc::new(TerminalView::new(config.locale));

    let mut app = App::new(&config, remote, store, view).await?;
    app.startup().await?;
    terminal::run(&mut app).await?;

    Ok(())
}
