//! Terminal logger.
//!
//! `log::info!` is the CLI's normal output channel, so records go to stdout
//! without decoration unless `--verbose` is set. Warnings and errors go to
//! stderr. With `--logfile`, every record is mirrored to the file with ANSI
//! styling removed.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

struct CliLogger {
    level: LevelFilter,
    timestamps: bool,
    logfile: Option<Mutex<File>>,
}

impl CliLogger {
    fn format(&self, record: &Record<'_>) -> String {
        let mut line = String::new();
        if self.timestamps {
            line.push_str(&chrono::Local::now().format("%H:%M:%S%.3f ").to_string());
            line.push_str(&format!("{:<5} ", record.level()));
        }
        line.push_str(&record.args().to_string());
        line
    }

    fn with_logfile(&self, f: impl FnOnce(&mut File)) {
        if let Some(file) = &self.logfile {
            if let Ok(mut guard) = file.lock() {
                f(&mut *guard);
            }
        }
    }
}

impl Log for CliLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format(record);
        if record.level() <= Level::Warn {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }

        self.with_logfile(|file| {
            let plain = strip_ansi_escapes::strip_str(&line);
            // A failed mirror write must not abort the command.
            let _ = writeln!(file, "{plain}");
        });
    }

    fn flush(&self) {
        self.with_logfile(|file| {
            let _ = file.flush();
        });
    }
}

/// Install the logger. Call once, before any command runs.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> std::io::Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    let logfile = logfile.map(File::create).transpose()?.map(Mutex::new);

    let logger = CliLogger {
        level,
        timestamps: verbose,
        logfile,
    };
    log::set_boxed_logger(Box::new(logger))
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    log::set_max_level(level);
    Ok(())
}

/// Emit an empty line through the logger so it respects `--quiet` and is
/// mirrored to the log file.
pub(crate) fn log_blank() {
    log::info!("");
}
