//! Human-readable uptime.

use std::fmt::Write;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

/// Format whole seconds as `"<d>d <h>h <m>m <s>s"`.
///
/// Days, hours and minutes are emitted only when non-zero; seconds are always
/// emitted. `65` -> `"1m 5s"`, `90000` -> `"1d 1h 0s"`.
pub fn format_uptime(total_secs: u64) -> String {
    let days = total_secs / DAY;
    let hours = total_secs % DAY / HOUR;
    let minutes = total_secs % HOUR / MINUTE;
    let seconds = total_secs % MINUTE;

    let mut out = String::new();
    for (v, unit) in [(days, 'd'), (hours, 'h'), (minutes, 'm')] {
        if v > 0 {
            let _ = write!(out, "{v}{unit} ");
        }
    }
    let _ = write!(out, "{seconds}s");
    out
}
