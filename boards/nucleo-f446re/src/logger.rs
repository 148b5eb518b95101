//! Forwards `log` records from the driver crates to defmt (RTT)

use log::{Level, LevelFilter, Log, Metadata, Record};

struct DefmtLogger;

static LOGGER: DefmtLogger = DefmtLogger;

impl Log for DefmtLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let target = record.target();
        let message = defmt::Display2Format(record.args());
        match record.level() {
            Level::Error => defmt::error!("[{=str}] {}", target, message),
            Level::Warn => defmt::warn!("[{=str}] {}", target, message),
            Level::Info => defmt::info!("[{=str}] {}", target, message),
            Level::Debug => defmt::debug!("[{=str}] {}", target, message),
            Level::Trace => defmt::trace!("[{=str}] {}", target, message),
        }
    }

    fn flush(&self) {}
}

/// Installs the forwarder. Later calls keep the first installation.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
