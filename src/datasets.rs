//! Hand-authored sample data behind the dashboard demo.

use crate::models::Segment;

pub type SeriesTable = &'static [(&'static str, u8)];
pub type FunnelTable = &'static [(&'static str, u32)];

pub const DEFAULT_DAILY: SeriesTable = &[
    ("09:00", 78),
    ("10:00", 92),
    ("11:00", 95),
    ("12:00", 94),
    ("13:00", 80),
    ("14:00", 90),
    ("15:00", 93),
    ("16:00", 91),
    ("17:00", 84),
];

const SALES_DAILY: SeriesTable = &[
    ("09:00", 70),
    ("10:00", 88),
    ("11:00", 93),
    ("12:00", 95),
    ("13:00", 76),
    ("14:00", 89),
    ("15:00", 92),
    ("16:00", 90),
    ("17:00", 82),
];

const TECH_DAILY: SeriesTable = &[
    ("09:00", 65),
    ("10:00", 85),
    ("11:00", 96),
    ("12:00", 97),
    ("13:00", 83),
    ("14:00", 94),
    ("15:00", 96),
    ("16:00", 95),
    ("17:00", 88),
];

const OPS_DAILY: SeriesTable = &[
    ("09:00", 90),
    ("10:00", 94),
    ("11:00", 93),
    ("12:00", 92),
    ("13:00", 87),
    ("14:00", 91),
    ("15:00", 90),
    ("16:00", 89),
    ("17:00", 86),
];

/// Hourly series per department. `All` and `Hr` share the default series.
pub const DAILY_BY_SEGMENT: &[(Segment, SeriesTable)] = &[
    (Segment::All, DEFAULT_DAILY),
    (Segment::Sales, SALES_DAILY),
    (Segment::Tech, TECH_DAILY),
    (Segment::Ops, OPS_DAILY),
    (Segment::Hr, DEFAULT_DAILY),
];

pub const DEFAULT_FUNNEL: FunnelTable = &[
    ("Applied", 500),
    ("Screened", 300),
    ("Interviewed", 100),
    ("Offered", 20),
    ("Hired", 15),
];

pub const WEEKLY_ATTENDANCE: SeriesTable = &[
    ("Mon", 88),
    ("Tue", 92),
    ("Wed", 90),
    ("Thu", 95),
    ("Fri", 93),
    ("Sat", 85),
];

pub const WEEKLY_FUNNEL: FunnelTable = &[
    ("Applied", 120),
    ("Screened", 72),
    ("Interviewed", 24),
    ("Offered", 6),
    ("Hired", 4),
];

pub const WEEKLY_VIOLATIONS: u32 = 3;

pub const MONTHLY_ATTENDANCE: SeriesTable = &[
    ("Week 1", 91),
    ("Week 2", 89),
    ("Week 3", 94),
    ("Week 4", 92),
];

pub const MONTHLY_FUNNEL: FunnelTable = &[
    ("Applied", 2100),
    ("Screened", 1250),
    ("Interviewed", 420),
    ("Offered", 85),
    ("Hired", 64),
];

pub const MONTHLY_VIOLATIONS: u32 = 11;

pub const DEPARTMENT_SCORES: &[(&str, u8)] = &[
    ("Sales", 85),
    ("Tech", 92),
    ("HR", 88),
    ("Ops", 78),
    ("Mktg", 82),
];

pub const TOTAL_EMPLOYEES: (&str, &str) = ("1,248", "+12%");
pub const OPEN_POSITIONS: (&str, &str) = ("24", "-4");
