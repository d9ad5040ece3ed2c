use chrono::{DateTime, Local};

/// Seconds from `start` to now, with microsecond precision.
#[doc(hidden)]
pub fn elapsed_secs(start: DateTime<Local>) -> f64 {
    (Local::now() - start)
        .num_microseconds()
        .map(|n| n as f64 / 1_000_000.0)
        .unwrap_or(0.0)
}

/// Similar to `info!` macro in tracing, logs a timestamped line to stderr.
/// You can pass in the starting time and it will also log how long it took from starting time to now.
/// ```
/// # use deathtable::info_time;
/// info_time!("str {}, {}", 1, 2);
/// let time = chrono::Local::now();
/// info_time!(time, "str {}, {}", 1, 2);
/// ```
#[macro_export]
macro_rules! info_time {
    ($strfm:literal $(,)? $($arg:expr),*) => {{
        eprintln!("{:<30} : {}", ::chrono::Local::now(), format!($strfm, $($arg),*));
    }};
    ($time:expr, $strfm:literal $(,)? $($arg:expr),*) => {{
        let run_time = $crate::macros::elapsed_secs($time);
        eprintln!(
            "{:<30} : {} ({run_time} sec)",
            ::chrono::Local::now(),
            format!($strfm, $($arg),*)
        );
    }};
}
