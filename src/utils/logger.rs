use chrono::Local;
use std::fmt::Arguments;

pub struct Logger;

impl Logger {
    fn timestamp() -> String {
        Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
    }

    pub fn info(args: Arguments) {
        println!("[INFO ] [{}] {args}", Logger::timestamp());
    }

    pub fn debug(args: Arguments) {
        println!("[DEBUG] [{}] {args}", Logger::timestamp());
    }

    pub fn warn(args: Arguments) {
        eprintln!("[WARN ] [{}] {args}", Logger::timestamp());
    }

    pub fn error(args: Arguments) {
        eprintln!("[ERROR] [{}] {args}", Logger::timestamp());
    }
}

#[macro_export]
macro_rules! logger {
    (INFO, $($arg:tt)*) => {
        Logger::info(format_args!($($arg)*))
    };
    (DEBUG, $($arg:tt)*) => {
        Logger::debug(format_args!($($arg)*))
    };
    (WARN, $($arg:tt)*) => {
        Logger::warn(format_args!($($arg)*))
    };
    (ERROR, $($arg:tt)*) => {
        Logger::error(format_args!($($arg)*))
    };
}
