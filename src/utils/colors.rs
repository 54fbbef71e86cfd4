/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Profitability color:
/// \>0 → green
/// \<0 → red (cost overrun)
/// 0 → grey (break-even or no hours recorded)
pub fn color_for_profitability(value: f64) -> &'static str {
    if value > 0.0 {
        GREEN
    } else if value < 0.0 {
        RED
    } else {
        GREY
    }
}
