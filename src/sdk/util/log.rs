use env_logger::{Builder, Env};
use log::SetLoggerError;

/// Installs the process logger, filtered by `RUST_LOG` (default `info`).
///
/// Fails if a logger is already installed; that logger stays in place.
pub fn init_logging() -> Result<(), SetLoggerError> {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .format_module_path(false)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_reports_existing_logger() {
        let _ = init_logging();
        assert!(init_logging().is_err());
        log::info!("still logging through the first logger");
    }
}
