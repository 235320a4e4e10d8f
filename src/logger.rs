use anyhow::Result;
use simple_logger::init_with_level;
use std::env;

const RUNNER_DEBUG: &str = "RUNNER_DEBUG";

/// Debug output follows the runner's "enable debug logging" switch
pub fn init() -> Result<()> {
    init_with_level(level(env::var(RUNNER_DEBUG).ok().as_deref()))?;

    Ok(())
}

fn level(runner_debug: Option<&str>) -> log::Level {
    match runner_debug {
        Some("1") => log::Level::Debug,
        _ => log::Level::Info,
    }
}
