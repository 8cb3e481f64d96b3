use anyhow::{Context, Result};
use kindle_engine::logging::{init_logging, LoggingConfig};
use kindle_engine::render::RendererInit;
use kindle_engine::window::{Runtime, RuntimeConfig};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    println!("Hello");

    run_sort_bench()?;

    let config = RuntimeConfig {
        max_frames: env_number("KINDLE_MAX_FRAMES")?,
        ..RuntimeConfig::default()
    };

    log::info!(
        "opening {}x{} window \"{}\"",
        config.size.width,
        config.size.height,
        config.title
    );

    Runtime::run(config, RendererInit::default())
}

#[cfg(not(target_arch = "wasm32"))]
fn run_sort_bench() -> Result<()> {
    let sort_len = env_number("KINDLE_SORT_LEN")?.unwrap_or(kindle_bench::DEFAULT_LEN as u64);
    let report = kindle_bench::run(sort_len as usize, 0x5EED);
    println!("{report}");
    Ok(())
}

/// Browsers have no monotonic `Instant`; the benchmark only runs natively.
#[cfg(target_arch = "wasm32")]
fn run_sort_bench() -> Result<()> {
    log::info!("sorting benchmark skipped in the browser");
    Ok(())
}

/// Reads an optional unsigned integer from the environment.
fn env_number(name: &str) -> Result<Option<u64>> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{name} must be an unsigned integer, got {raw:?}")),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(err).with_context(|| format!("failed to read {name}")),
    }
}
