use neurogames_log::{
    default_logger, init_default_logger, log_error, log_game_event, log_info,
    shutdown_default_logger, LogStats, LoggerConfig,
};
use std::backtrace::{Backtrace, BacktraceStatus};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const CONFIG_FILE: &str = "neurogames.toml";
const DEMO_PLAYER: &str = "player_demo_123";
const ROUNDS: u32 = 3;

#[tokio::main]
async fn main() -> ExitCode {
    // Diagnostics of the logger itself; game records go through the event logger
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match LoggerConfig::load_or_default(CONFIG_FILE).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {}: {}", CONFIG_FILE, e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = init_default_logger(&config) {
        eprintln!("Failed to initialize event logger: {}", e);
        return ExitCode::FAILURE;
    }

    let code = match run() {
        Ok(stats) => {
            print_summary(&stats);
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_failure(&e);
            ExitCode::FAILURE
        }
    };

    if let Err(e) = shutdown_default_logger() {
        eprintln!("Failed to close event logger: {}", e);
        return ExitCode::FAILURE;
    }
    code
}

fn run() -> anyhow::Result<LogStats> {
    log_info("=== NeuroGames application started ===")?;
    log_game_event("APPLICATION_START", None, Some("Main program initialized"))?;

    let stats = simulate_game_flow()?;

    log_info("Application finished successfully")?;
    Ok(stats)
}

fn simulate_game_flow() -> anyhow::Result<LogStats> {
    log_game_event("PLAYER_LOGIN", Some(DEMO_PLAYER), Some("Player logged in"))?;
    log_game_event("GAME_START", Some(DEMO_PLAYER), Some("New game started"))?;

    for round in 1..=ROUNDS {
        log_game_event(
            "ROUND_START",
            Some(DEMO_PLAYER),
            Some(&format!("Round {} started", round)),
        )?;

        let score = round * 100;
        log_game_event(
            "ROUND_END",
            Some(DEMO_PLAYER),
            Some(&format!("Round {} finished, score: {}", round, score)),
        )?;
    }

    log_game_event("GAME_END", Some(DEMO_PLAYER), Some("Game completed"))?;

    log_statistics()
}

fn log_statistics() -> anyhow::Result<LogStats> {
    let stats = default_logger()?.stats()?;

    log_info(&format!("Log file size: {} bytes", stats.file_size_bytes))?;
    log_info(&format!("Log entries: {} lines", stats.line_count))?;
    if let Some(modified) = stats.last_modified {
        log_info(&format!("Last modified: {}", modified))?;
    }
    Ok(stats)
}

fn print_summary(stats: &LogStats) {
    println!();
    println!("=== Log statistics ===");
    println!("File size: {} bytes", stats.file_size_bytes);
    println!("Lines: {}", stats.line_count);
    match stats.last_modified {
        Some(modified) => println!("Last modified: {}", modified),
        None => println!("Last modified: unknown"),
    }
}

fn report_failure(err: &anyhow::Error) {
    let reports = [
        format!("Critical failure: {:#}", err),
        format!("Stack trace: {}", stack_trace(err)),
    ];
    for report in &reports {
        if let Err(log_err) = log_error(report) {
            eprintln!("{}", report);
            eprintln!("Failed to write error log: {}", log_err);
        }
    }
}

/// The error's own backtrace, or one captured here when `RUST_BACKTRACE` left it disabled.
fn stack_trace(err: &anyhow::Error) -> String {
    let carried = err.backtrace();
    match carried.status() {
        BacktraceStatus::Captured => carried.to_string(),
        _ => Backtrace::force_capture().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_trace_is_never_disabled() {
        let err = anyhow::anyhow!("simulated failure");
        let trace = stack_trace(&err);

        assert!(!trace.is_empty());
        assert!(!trace.contains("disabled backtrace"));
    }
}
