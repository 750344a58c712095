#![forbid(unsafe_code)]

use std::error::Error;

use log::LevelFilter;
use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use simplelog::{ColorChoice, CombinedLogger, Config, ConfigBuilder, TermLogger, TerminalMode, WriteLogger};

pub(crate) mod navlog_reader;
pub(crate) mod prompt;
pub(crate) mod route_writer;
pub(crate) mod star_reader;
pub(crate) mod units;

const LOG_FILE: &str = "descent-profiler.log";

pub struct Logger;

impl Logger {
    pub fn new(verbose: bool) -> Self {
        let term_level = if verbose { LevelFilter::Info } else { LevelFilter::Warn };
        Self::init_logger(term_level);
        Logger
    }

    fn init_logger(term_level: LevelFilter) {
        if let Some(home_path) = home::home_dir() {
            let log_path = home_path.join(LOG_FILE);
            let condition = RollingConditionBasic::new()
                .daily()
                .max_size(1024 * 1024);
            match BasicRollingFileAppender::new(log_path, condition, 2) {
                Ok(file) => {
                    let config = ConfigBuilder::new()
                        .set_time_offset_to_local()
                        .unwrap_or_else(|builder| builder)
                        .build();
                    let config2 = ConfigBuilder::new()
                        .set_location_level(LevelFilter::Error)
                        .set_time_format_rfc3339()
                        .set_time_offset_to_local()
                        .unwrap_or_else(|builder| builder)
                        .build();
                    CombinedLogger::init(vec![
                        TermLogger::new(
                            term_level,
                            config,
                            TerminalMode::Stderr,
                            ColorChoice::Auto,
                        ),
                        WriteLogger::new(LevelFilter::Info, config2, file),
                    ])
                    .unwrap_or_else(|e| {
                        Self::print_error(&e);
                    });
                    return;
                }
                Err(e) => {
                    Self::print_error(&e);
                }
            }
        }
        TermLogger::init(
            term_level,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        )
        .unwrap_or_else(|e| {
            Self::print_error(&e);
        });
    }

    fn print_error(e: &dyn Error) {
        eprintln!("Unable to initiate logger: {}", e);
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        log::logger().flush();
    }
}
