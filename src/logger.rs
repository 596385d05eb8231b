use std::fs::{create_dir_all, OpenOptions};
use std::io;
use std::path::Path;

use chrono::Local;
use fern::Dispatch;
use log::LevelFilter;


#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("cannot open log file: {0}")]
    LogFile(#[from] io::Error),

    #[error("logger already set: {0}")]
    AlreadySet(#[from] log::SetLoggerError),
}


/// Records go to stderr, leaving stdout to the list output, plus `log_file` when given.
pub fn init_logger(level: LevelFilter, log_file: Option<&str>) -> Result<(), LoggerError> {
    let mut dispatch = Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}][{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(io::stderr());

    if let Some(path) = log_file {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        dispatch = dispatch.chain(file);
    }

    dispatch.apply()?;
    Ok(())
}
