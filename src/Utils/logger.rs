use crate::Ckin::ckin_errors::CkinError;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

/// Installs a terminal logger with the given verbosity.
/// Fails with [`CkinError::Logger`] when a logger is already installed.
pub fn init_logger(level: LevelFilter) -> Result<(), CkinError> {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Debug)
        .build();
    TermLogger::init(level, config, TerminalMode::Mixed, ColorChoice::Auto)?;
    Ok(())
}
