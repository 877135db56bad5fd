//! Overlap-aware calendar layout.
//!
//! Arranges the work blocks of one calendar day on a pixel grid. Blocks
//! whose time intervals intersect are gathered into overlap clusters and
//! share the horizontal space of their column; vertical placement maps
//! minutes to pixels from a configured grid origin.
//!
//! Overlap is not transitive: A may overlap B and C while B and C are
//! disjoint, yet all three occupy the same time column. Clusters are
//! therefore built with an explicit disjoint-set union over the interval
//! graph rather than by appending to the first matching group.
//!
//! Inputs are assumed well-formed (`start_time < end_time`); blocks that
//! fail validation are rejected at the data boundary and never reach this
//! component.

use chrono::{Duration, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::GridConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::WorkBlock;

/// A work block with its computed position on the day grid.
///
/// `top` and `height` are pixel values; `left_percent` and `width_percent`
/// are percentages of the day column. None of them are rounded here;
/// rounding to display precision is a presentation concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedBlock {
    /// The block being positioned.
    pub block: WorkBlock,
    /// Pixel offset from the top of the day column.
    pub top: Decimal,
    /// Pixel height of the block.
    pub height: Decimal,
    /// Width as a percentage of the day column.
    pub width_percent: Decimal,
    /// Left offset as a percentage of the day column.
    pub left_percent: Decimal,
}

/// One day of a laid-out week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDay {
    /// The calendar date of the day.
    pub date: NaiveDate,
    /// The day's blocks with their positions, ordered by (start, end).
    pub blocks: Vec<PositionedBlock>,
}

/// A full week of laid-out days, Monday through Sunday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleWeek {
    /// The Monday the week starts on.
    pub week_start: NaiveDate,
    /// The Sunday the week ends on.
    pub week_end: NaiveDate,
    /// The seven days of the week, in order.
    pub days: Vec<ScheduleDay>,
}

/// Disjoint-set over block indices, used to merge overlap clusters.
struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
        }
    }

    fn find(&mut self, i: usize) -> usize {
        if self.parent[i] != i {
            let root = self.find(self.parent[i]);
            self.parent[i] = root;
        }
        self.parent[i]
    }

    fn union(&mut self, a: usize, b: usize) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a != root_b {
            self.parent[root_b] = root_a;
        }
    }
}

/// Partitions sorted blocks into overlap clusters.
///
/// Returns clusters as lists of indices into `blocks`, each list ascending,
/// clusters ordered by their first member.
fn cluster_blocks(blocks: &[WorkBlock]) -> Vec<Vec<usize>> {
    let mut sets = DisjointSet::new(blocks.len());
    for i in 0..blocks.len() {
        for j in 0..i {
            if blocks[i].overlaps(&blocks[j]) {
                sets.union(i, j);
            }
        }
    }

    let mut clusters: Vec<Vec<usize>> = Vec::new();
    let mut cluster_of_root: Vec<Option<usize>> = vec![None; blocks.len()];
    for i in 0..blocks.len() {
        let root = sets.find(i);
        match cluster_of_root[root] {
            Some(cluster) => clusters[cluster].push(i),
            None => {
                cluster_of_root[root] = Some(clusters.len());
                clusters.push(vec![i]);
            }
        }
    }
    clusters
}

/// Lays out the blocks scheduled on one calendar day.
///
/// Blocks are sorted by `(start_time, end_time)`, partitioned into overlap
/// clusters, and each cluster's members share the usable width equally,
/// placed left to right in sorted order with the configured gap between
/// neighbors. Vertical position maps the block's start offset from the
/// grid origin to pixels; height gets a floor so very short blocks stay
/// visible and clickable.
///
/// # Examples
///
/// ```
/// use roster_engine::calculation::layout_day;
/// use roster_engine::config::GridConfig;
/// use roster_engine::models::WorkBlock;
/// use rust_decimal::Decimal;
///
/// let block = WorkBlock {
///     id: "block_001".to_string(),
///     name: "Opening".to_string(),
///     location: String::new(),
///     client_id: None,
///     day_of_month: 5,
///     month: 1,
///     year: 2026,
///     start_time: chrono::NaiveTime::parse_from_str("08:00", "%H:%M").unwrap(),
///     end_time: chrono::NaiveTime::parse_from_str("10:00", "%H:%M").unwrap(),
///     duration_hours: Decimal::new(20, 1),
///     hourly_value: Decimal::ZERO,
///     archived: false,
///     constant: false,
/// };
///
/// let positioned = layout_day(vec![block], &GridConfig::default());
/// // 08:00 is 120 minutes past the 06:00 grid origin at 0.5 px/min,
/// // below a 48 px header.
/// assert_eq!(positioned[0].top, Decimal::new(108, 0));
/// assert_eq!(positioned[0].height, Decimal::new(60, 0));
/// ```
pub fn layout_day(mut blocks: Vec<WorkBlock>, grid: &GridConfig) -> Vec<PositionedBlock> {
    blocks.sort_by_key(|b| (b.start_minutes(), b.end_minutes()));

    let clusters = cluster_blocks(&blocks);
    let origin_minutes = i64::from(grid.grid_start_hour) * 60;

    let mut positions: Vec<Option<(Decimal, Decimal)>> = vec![None; blocks.len()];
    for cluster in &clusters {
        let n = Decimal::from(cluster.len());
        let gaps = Decimal::from(cluster.len() - 1) * grid.column_gap_percent;
        let width = (grid.usable_width_percent - gaps) / n;
        for (slot, &index) in cluster.iter().enumerate() {
            let left = grid.left_margin_percent
                + Decimal::from(slot) * (width + grid.column_gap_percent);
            positions[index] = Some((width, left));
        }
    }

    blocks
        .into_iter()
        .zip(positions)
        .map(|(block, position)| {
            let (width_percent, left_percent) =
                position.expect("every block belongs to exactly one cluster");
            let top = grid.header_height_px
                + Decimal::from(block.start_minutes() - origin_minutes) * grid.pixels_per_minute;
            let height = (Decimal::from(block.scheduled_minutes()) * grid.pixels_per_minute)
                .max(grid.min_block_height_px);
            PositionedBlock {
                block,
                top,
                height,
                width_percent,
                left_percent,
            }
        })
        .collect()
}

/// Lays out a full ISO week of work blocks, Monday through Sunday.
///
/// Keeps only non-archived blocks whose date components resolve to a date
/// within the week, then lays out each day independently.
///
/// # Errors
///
/// Returns [`EngineError::InvalidWeek`] when (year, week) does not name an
/// ISO week.
pub fn layout_week(
    blocks: &[WorkBlock],
    year: i32,
    week: u32,
    grid: &GridConfig,
) -> EngineResult<ScheduleWeek> {
    let week_start = NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)
        .ok_or(EngineError::InvalidWeek { year, week })?;
    let week_end = week_start + Duration::days(6);

    let days = (0..7)
        .map(|offset| {
            let date = week_start + Duration::days(offset);
            let day_blocks: Vec<WorkBlock> = blocks
                .iter()
                .filter(|b| !b.archived)
                .filter(|b| b.date() == Some(date))
                .cloned()
                .collect();
            ScheduleDay {
                date,
                blocks: layout_day(day_blocks, grid),
            }
        })
        .collect();

    Ok(ScheduleWeek {
        week_start,
        week_end,
        days,
    })
}
