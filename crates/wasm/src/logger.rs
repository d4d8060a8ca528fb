//! `log` backend writing to the browser console

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Level used until the page asks for another one
const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// Forwards `log` records to `console.*`
///
/// Filtering follows `log::max_level()`, so [`set_level`] takes effect
/// immediately.
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Install the console logger once; later calls are no-ops
pub fn install() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(DEFAULT_LEVEL);
    }
}

/// Parse a level name (`off`, `error`, `warn`, `info`, `debug`, `trace`)
pub(crate) fn parse_level(name: &str) -> Result<LevelFilter, String> {
    name.trim()
        .parse::<LevelFilter>()
        .map_err(|_| format!("Unknown log level '{}'", name))
}

/// Change the console log level
pub fn set_level(name: &str) -> Result<(), String> {
    let level = parse_level(name)?;
    log::set_max_level(level);
    Ok(())
}

/// Console line for a record, e.g. `[meme_ui WARN] submit ignored`
pub(crate) fn format_record(level: Level, target: &str, message: &str) -> String {
    let crate_name = target.split("::").next().unwrap_or(target);
    format!("[{} {}] {}", crate_name, level, message)
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_record(
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        let line = wasm_bindgen::JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}
