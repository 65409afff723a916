use anyhow::{Context, bail};
use item_sync::commands;
use item_sync::{Config, HookEvent, init_logger_with_file};

const USAGE: &str = "usage: item-sync check | item-sync sync <items.json> [--create]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), None, config.log_dir.as_deref());

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("check") => commands::check(&config).await,
        Some("sync") => {
            let path = args.get(1).context(USAGE)?;
            // Update creates items without a product ID and updates the rest
            let event = if args.iter().any(|a| a == "--create") {
                HookEvent::Created
            } else {
                HookEvent::Updated
            };

            let summary = commands::sync_file(&config, path, event).await?;
            if summary.failed > 0 {
                bail!("{} of {} items failed to sync", summary.failed, summary.total);
            }
            Ok(())
        }
        _ => bail!(USAGE),
    }
}
