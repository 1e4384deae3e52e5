//! log4rs setup.

use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;

const LOG_CONFIG_FILE: &str = "log4rs.yml";
const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l:5})} {t} - {m}{n}";

/// Configure logging from `log4rs.yml`, or console at info level if it is absent.
pub fn init_logging() -> Result<(), Box<dyn Error>> {
    if std::path::Path::new(LOG_CONFIG_FILE).exists() {
        log4rs::init_file(LOG_CONFIG_FILE, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {LOG_CONFIG_FILE}: {e}"))?;
        return Ok(());
    }

    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info))?;
    log4rs::init_config(config)?;
    Ok(())
}
