//! Work block model.
//!
//! A work block is a scheduled interval of work at a location, optionally
//! for a client. Its calendar position is stored as separate day/month/year
//! components rather than a single date, so an impossible combination such
//! as February 31 is representable by construction and must be rejected by
//! [`WorkBlock::validate`] before the block reaches any core computation.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents a work block: a shift template or a single occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkBlock {
    /// Unique identifier for the work block.
    pub id: String,
    /// Display name of the block.
    #[serde(default)]
    pub name: String,
    /// Where the work takes place.
    #[serde(default)]
    pub location: String,
    /// The client the work is performed for, if any.
    #[serde(default)]
    pub client_id: Option<String>,
    /// Day of the month, 1 through 31.
    pub day_of_month: u32,
    /// Month of the year, 1 through 12.
    pub month: u32,
    /// Calendar year.
    pub year: i32,
    /// The start time of the block.
    pub start_time: NaiveTime,
    /// The end time of the block. Must be after `start_time`.
    pub end_time: NaiveTime,
    /// Default duration in decimal hours, used when an assignment does not
    /// carry its own duration.
    pub duration_hours: Decimal,
    /// The hourly rate billed to the client for this block.
    #[serde(default)]
    pub hourly_value: Decimal,
    /// Archived blocks are excluded from schedules and reports.
    #[serde(default)]
    pub archived: bool,
    /// Marks the block as a weekly-recurring template. A constant block is
    /// expanded into occurrences for the rest of its month at creation.
    #[serde(default)]
    pub constant: bool,
}

impl WorkBlock {
    /// Validates the block's shape.
    ///
    /// Rejects a day-of-month outside 1..=31, a start time at or after the
    /// end time, and date components that do not name a real calendar date
    /// (e.g. February 31). Invalid blocks are never silently corrected.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidWorkBlock`] describing the first
    /// violation found.
    pub fn validate(&self) -> EngineResult<()> {
        if self.day_of_month < 1 || self.day_of_month > 31 {
            return Err(EngineError::InvalidWorkBlock {
                block_id: self.id.clone(),
                message: format!(
                    "day of month must be between 1 and 31, got {}",
                    self.day_of_month
                ),
            });
        }
        if self.start_time >= self.end_time {
            return Err(EngineError::InvalidWorkBlock {
                block_id: self.id.clone(),
                message: "end time must be after start time".to_string(),
            });
        }
        if self.date().is_none() {
            return Err(EngineError::InvalidWorkBlock {
                block_id: self.id.clone(),
                message: format!(
                    "{}-{:02}-{:02} is not a valid calendar date",
                    self.year, self.month, self.day_of_month
                ),
            });
        }
        Ok(())
    }

    /// Resolves the block's date components into a calendar date.
    ///
    /// Returns `None` when the components do not form a valid date.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day_of_month)
    }

    /// Returns the weekday of the block's date, if the date is valid.
    pub fn weekday(&self) -> Option<Weekday> {
        self.date().map(|d| d.weekday())
    }

    /// Minutes from midnight to the block's start time.
    pub fn start_minutes(&self) -> i64 {
        i64::from(self.start_time.hour()) * 60 + i64::from(self.start_time.minute())
    }

    /// Minutes from midnight to the block's end time.
    pub fn end_minutes(&self) -> i64 {
        i64::from(self.end_time.hour()) * 60 + i64::from(self.end_time.minute())
    }

    /// The scheduled length of the block in minutes.
    pub fn scheduled_minutes(&self) -> i64 {
        self.end_minutes() - self.start_minutes()
    }

    /// Checks whether two blocks on the same day overlap in time.
    ///
    /// Boundaries are open: a block whose end coincides with another's
    /// start does not overlap it.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_engine::models::WorkBlock;
    /// use chrono::NaiveTime;
    /// use rust_decimal::Decimal;
    ///
    /// let make = |start: &str, end: &str| WorkBlock {
    ///     id: "b".to_string(),
    ///     name: String::new(),
    ///     location: String::new(),
    ///     client_id: None,
    ///     day_of_month: 5,
    ///     month: 1,
    ///     year: 2026,
    ///     start_time: NaiveTime::parse_from_str(start, "%H:%M").unwrap(),
    ///     end_time: NaiveTime::parse_from_str(end, "%H:%M").unwrap(),
    ///     duration_hours: Decimal::new(80, 1),
    ///     hourly_value: Decimal::ZERO,
    ///     archived: false,
    ///     constant: false,
    /// };
    ///
    /// assert!(make("09:00", "12:00").overlaps(&make("11:00", "14:00")));
    /// assert!(!make("09:00", "12:00").overlaps(&make("12:00", "14:00")));
    /// ```
    pub fn overlaps(&self, other: &WorkBlock) -> bool {
        !(self.end_minutes() <= other.start_minutes()
            || other.end_minutes() <= self.start_minutes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    fn create_test_block(day: u32, start: &str, end: &str) -> WorkBlock {
        WorkBlock {
            id: format!("block_{day:02}"),
            name: "Night watch".to_string(),
            location: "Warehouse 4".to_string(),
            client_id: Some("client_001".to_string()),
            day_of_month: day,
            month: 1,
            year: 2026,
            start_time: time(start),
            end_time: time(end),
            duration_hours: Decimal::new(80, 1),
            hourly_value: Decimal::new(2000, 2),
            archived: false,
            constant: false,
        }
    }

    #[test]
    fn test_valid_block_passes_validation() {
        let block = create_test_block(15, "09:00", "17:00");
        assert!(block.validate().is_ok());
    }

    #[test]
    fn test_day_of_month_out_of_range_rejected() {
        let block = create_test_block(32, "09:00", "17:00");
        match block.validate().unwrap_err() {
            EngineError::InvalidWorkBlock { message, .. } => {
                assert!(message.contains("between 1 and 31"));
            }
            other => panic!("Expected InvalidWorkBlock, got {:?}", other),
        }
    }

    #[test]
    fn test_start_after_end_rejected() {
        let block = create_test_block(15, "17:00", "09:00");
        match block.validate().unwrap_err() {
            EngineError::InvalidWorkBlock { message, .. } => {
                assert!(message.contains("end time must be after start time"));
            }
            other => panic!("Expected InvalidWorkBlock, got {:?}", other),
        }
    }

    #[test]
    fn test_start_equal_end_rejected() {
        let block = create_test_block(15, "09:00", "09:00");
        assert!(block.validate().is_err());
    }

    #[test]
    fn test_february_31_is_representable_but_invalid() {
        let mut block = create_test_block(31, "09:00", "17:00");
        block.month = 2;
        // The struct holds the impossible date; validation rejects it.
        assert_eq!(block.day_of_month, 31);
        assert!(block.date().is_none());
        match block.validate().unwrap_err() {
            EngineError::InvalidWorkBlock { message, .. } => {
                assert!(message.contains("not a valid calendar date"));
            }
            other => panic!("Expected InvalidWorkBlock, got {:?}", other),
        }
    }

    #[test]
    fn test_date_and_weekday() {
        let block = create_test_block(15, "09:00", "17:00");
        // 2026-01-15 is a Thursday
        assert_eq!(
            block.date(),
            Some(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap())
        );
        assert_eq!(block.weekday(), Some(Weekday::Thu));
    }

    #[test]
    fn test_minute_helpers() {
        let block = create_test_block(15, "06:30", "09:15");
        assert_eq!(block.start_minutes(), 390);
        assert_eq!(block.end_minutes(), 555);
        assert_eq!(block.scheduled_minutes(), 165);
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = create_test_block(15, "09:00", "12:00");
        let b = create_test_block(15, "11:00", "14:00");
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_back_to_back_blocks_do_not_overlap() {
        let a = create_test_block(15, "09:00", "12:00");
        let b = create_test_block(15, "12:00", "14:00");
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_containment_is_overlap() {
        let outer = create_test_block(15, "08:00", "18:00");
        let inner = create_test_block(15, "10:00", "11:00");
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_work_block_serialization_round_trip() {
        let block = create_test_block(15, "09:00", "17:00");
        let json = serde_json::to_string(&block).unwrap();
        let deserialized: WorkBlock = serde_json::from_str(&json).unwrap();
        assert_eq!(block, deserialized);
    }

    #[test]
    fn test_work_block_deserialization_defaults() {
        let json = r#"{
            "id": "block_001",
            "day_of_month": 15,
            "month": 1,
            "year": 2026,
            "start_time": "09:00:00",
            "end_time": "17:00:00",
            "duration_hours": "8.0"
        }"#;

        let block: WorkBlock = serde_json::from_str(json).unwrap();
        assert!(block.name.is_empty());
        assert!(block.client_id.is_none());
        assert_eq!(block.hourly_value, Decimal::ZERO);
        assert!(!block.archived);
        assert!(!block.constant);
    }
}
