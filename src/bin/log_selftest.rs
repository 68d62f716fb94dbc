use neurogames_log::{
    default_logger, log_game_event, log_info, shutdown_default_logger, DomainLogger,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let logger = default_logger()?;

    log_info("NeuroGames logger self-test started")?;

    // One record per level; DEBUG is filtered at the default INFO threshold
    log_info("INFO: logger initialized")?;
    logger.warning("WARNING: test warning")?;
    logger.debug("DEBUG: debug information")?;

    log_game_event("SYSTEM_START", Some("system"), Some("Log system activated"))?;
    log_game_event("TEST_EVENT", Some("admin"), Some("Logger self-test executed"))?;

    let stats = logger.stats()?;
    println!();
    println!("=== Log statistics ===");
    println!("File size: {} bytes", stats.file_size_bytes);
    println!("Lines: {}", stats.line_count);
    match stats.last_modified {
        Some(modified) => println!("Last modified: {}", modified),
        None => println!("Last modified: unknown"),
    }

    log_info("Log system tested and ready")?;
    println!();
    println!("Log system is ready!");

    shutdown_default_logger()?;
    Ok(())
}
