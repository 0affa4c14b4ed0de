use std::io::Write;
use env_logger::{Builder, Env};

/// Installs the process logger. `RUST_LOG` wins over `default_level`.
/// Calling it again is a no-op.
pub fn init_logging(default_level: &str) {
    let env = Env::default().default_filter_or(default_level);
    let result = Builder::from_env(env)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} [{}] {}",
                buf.timestamp_millis(),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();

    if result.is_err() {
        log::debug!("Logger already initialized");
    }
}

pub fn init_from_config(config: &crate::structs::config::logging_config::LoggingConfig) {
    init_logging(&config.level);
}
