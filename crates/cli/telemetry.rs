use color_eyre::Result;
use tracing_subscriber::{filter::LevelFilter, layer::Layered, EnvFilter, Registry};
use tracing_subscriber::{prelude::*, util::SubscriberInitExt};

pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

pub type CompactRegistry = Layered<
    EnvFilter,
    Layered<
        tracing_subscriber::fmt::Layer<
            Registry,
            tracing_subscriber::fmt::format::DefaultFields,
            tracing_subscriber::fmt::format::Format<tracing_subscriber::fmt::format::Compact>,
        >,
        Registry,
    >,
>;

fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .with_env_var(LOG_LEVEL_ENV)
        .from_env_lossy()
}

fn registry() -> CompactRegistry {
    Registry::default()
        .with(tracing_subscriber::fmt::layer().compact())
        .with(env_filter())
}

/// `LOG_LEVEL` takes any `EnvFilter` directive, `info` when unset.
pub fn init() -> Result<()> {
    registry().try_init()?;

    Ok(())
}
