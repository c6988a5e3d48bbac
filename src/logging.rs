//! Logger setup.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

/// Initialize log4rs from `config_file`, or a warn-level stderr logger if
/// the file cannot be used.
pub fn init_logging(config_file: &Path) -> Result<(), Box<dyn Error>> {
    match log4rs::init_file(config_file, Default::default()) {
        Ok(()) => Ok(()),
        Err(e) => {
            init_fallback()?;
            log::warn!(
                "Could not load log config {}: {e}, logging to stderr",
                config_file.display()
            );
            Ok(())
        }
    }
}

fn init_fallback() -> Result<(), Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}
