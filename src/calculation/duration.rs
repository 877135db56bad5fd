//! Decimal-hours duration formatting.
//!
//! Presentation collaborators expect durations as `"Hh"` / `"HhMMm"` text
//! (`1.5` hours renders as `"1h30m"`, whole hours drop the minutes suffix).
//! Parsing is the exact inverse for minute-granular values.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{EngineError, EngineResult};

/// Formats decimal hours as `"Hh"` or `"HhMMm"`.
///
/// # Examples
///
/// ```
/// use roster_engine::calculation::format_duration;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_duration(Decimal::new(15, 1)), "1h30m");
/// assert_eq!(format_duration(Decimal::new(225, 2)), "2h15m");
/// assert_eq!(format_duration(Decimal::new(20, 1)), "2h");
/// assert_eq!(format_duration(Decimal::ZERO), "0h");
/// ```
pub fn format_duration(hours: Decimal) -> String {
    let total_minutes = (hours * Decimal::new(60, 0))
        .round()
        .to_i64()
        .unwrap_or(0)
        .max(0);
    let whole_hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if minutes == 0 {
        format!("{whole_hours}h")
    } else {
        format!("{whole_hours}h{minutes:02}m")
    }
}

/// Parses `"Hh"` / `"HhMMm"` text back into decimal hours.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDuration`] when the text does not match
/// the format or the minutes component is 60 or more.
///
/// # Examples
///
/// ```
/// use roster_engine::calculation::parse_duration;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_duration("2h15m").unwrap(), Decimal::new(225, 2));
/// assert_eq!(parse_duration("2h").unwrap(), Decimal::new(2, 0));
/// assert!(parse_duration("2h75m").is_err());
/// ```
pub fn parse_duration(value: &str) -> EngineResult<Decimal> {
    let invalid = || EngineError::InvalidDuration {
        value: value.to_string(),
    };

    let (hours_part, rest) = value.split_once('h').ok_or_else(invalid)?;
    let hours: i64 = hours_part.parse().map_err(|_| invalid())?;
    if hours < 0 {
        return Err(invalid());
    }

    let minutes: i64 = if rest.is_empty() {
        0
    } else {
        let minutes_part = rest.strip_suffix('m').ok_or_else(invalid)?;
        minutes_part.parse().map_err(|_| invalid())?
    };
    if !(0..60).contains(&minutes) {
        return Err(invalid());
    }

    Ok(Decimal::new(hours * 60 + minutes, 0) / Decimal::new(60, 0))
}
