use std::fmt;
use std::str::FromStr;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Daily,
    Weekly,
    Monthly,
}

impl Granularity {
    pub const ALL: [Granularity; 3] = [Granularity::Daily, Granularity::Weekly, Granularity::Monthly];

    pub fn label(self) -> &'static str {
        match self {
            Granularity::Daily => "daily",
            Granularity::Weekly => "weekly",
            Granularity::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Department filter applied to the daily attendance view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Segment {
    All,
    Sales,
    Tech,
    Ops,
    #[serde(rename = "HR")]
    Hr,
}

impl Segment {
    pub const ALL: [Segment; 5] = [
        Segment::All,
        Segment::Sales,
        Segment::Tech,
        Segment::Ops,
        Segment::Hr,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Segment::All => "All",
            Segment::Sales => "Sales",
            Segment::Tech => "Tech",
            Segment::Ops => "Ops",
            Segment::Hr => "HR",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown segment '{0}'")]
pub struct UnknownSegment(pub String);

impl FromStr for Segment {
    type Err = UnknownSegment;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Segment::ALL
            .into_iter()
            .find(|segment| segment.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownSegment(trimmed.to_string()))
    }
}

/// One time bucket of an attendance series.
///
/// The absent share is always the complement of the present share, so the
/// fields are private and points are only built through [`AttendancePoint::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendancePoint {
    label: String,
    present_percent: u8,
    absent_percent: u8,
}

impl AttendancePoint {
    pub fn new(label: impl Into<String>, present_percent: u8) -> Self {
        let present_percent = present_percent.min(100);
        Self {
            label: label.into(),
            present_percent,
            absent_percent: 100 - present_percent,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn present_percent(&self) -> u8 {
        self.present_percent
    }

    pub fn absent_percent(&self) -> u8 {
        self.absent_percent
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecruitmentStage {
    pub label: String,
    pub count: u32,
}

impl RecruitmentStage {
    pub fn new(label: impl Into<String>, count: u32) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// The bundle of series shown for one (granularity, segment) key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewSelection {
    pub granularity: Granularity,
    pub segment: Segment,
    pub attendance: Vec<AttendancePoint>,
    pub recruitment: Vec<RecruitmentStage>,
    pub violations: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceTier {
    Strong,
    Watch,
    AtRisk,
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PerformanceTier::Strong => "strong",
            PerformanceTier::Watch => "watch",
            PerformanceTier::AtRisk => "at risk",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentScore {
    pub department: String,
    pub score: u8,
    pub tier: PerformanceTier,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KpiCard {
    pub title: String,
    pub value: String,
    pub change: String,
}

impl KpiCard {
    pub fn is_positive(&self) -> bool {
        self.change.starts_with('+')
    }
}
