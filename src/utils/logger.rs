use lazy_static::lazy_static;
use std::backtrace::Backtrace;
use std::fs::OpenOptions;
use std::io::Write;
use std::panic;
use std::path::PathBuf;
use std::sync::Mutex;

/// Where diagnostic lines go. Stdout is reserved for the analysis document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogSink {
    Stderr,
    File(PathBuf),
}

#[derive(Clone, Debug)]
struct LoggerState {
    sink: LogSink,
    verbose: bool,
}

lazy_static! {
    static ref LOGGER: Mutex<Option<LoggerState>> = Mutex::new(None);
}

fn append_line(sink: &LogSink, line: &str) {
    match sink {
        LogSink::Stderr => {
            let _ = writeln!(std::io::stderr(), "{}", line);
        }
        LogSink::File(path) => {
            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
                let _ = writeln!(file, "{}", line);
            }
        }
    }
}

pub fn init(sink: LogSink, verbose: bool) {
    if let LogSink::File(path) = &sink {
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
            let _ = writeln!(file, "=== Log Started: {} ===", chrono::Local::now());
        }
    }

    let state = LoggerState { sink, verbose };
    if let Ok(mut guard) = LOGGER.lock() {
        *guard = Some(state.clone());
    }

    panic::set_hook(Box::new(move |info| {
        let backtrace = Backtrace::capture();
        let msg = match info.payload().downcast_ref::<&str>() {
            Some(s) => *s,
            None => match info.payload().downcast_ref::<String>() {
                Some(s) => &s[..],
                None => "Box<Any>",
            },
        };

        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown".to_string());

        let error_msg = format!(
            "\nCRITICAL PANIC at {}:\nMessage: {}\nBacktrace:\n{:?}\n",
            location, msg, backtrace
        );

        append_line(&state.sink, &error_msg);
    }));
}

fn format_line(level: &str, msg: &str) -> String {
    let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
    format!("[{}][{}] {}", timestamp, level, msg)
}

pub fn log(level: &str, msg: &str) {
    let Ok(guard) = LOGGER.lock() else {
        return;
    };
    if let Some(state) = guard.as_ref() {
        if level != "ERROR" && !state.verbose {
            return;
        }
        append_line(&state.sink, &format_line(level, msg));
    }
}

pub fn info(msg: &str) {
    log("INFO", msg);
}

pub fn error(msg: &str) {
    log("ERROR", msg);
}

pub fn debug(msg: &str) {
    log("DEBUG", msg);
}
