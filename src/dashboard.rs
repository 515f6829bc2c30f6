//! In-memory dashboard state: resolver output plus an optional manual override.

use crate::models::{AttendancePoint, Granularity, RecruitmentStage, Segment, ViewSelection};
use crate::resolver;

#[derive(Debug, Clone)]
pub struct Dashboard {
    resolved: ViewSelection,
    edits: Option<ViewSelection>,
}

impl Dashboard {
    pub fn new(granularity: Granularity, segment: Segment) -> Self {
        Self::from_view(resolver::resolve(granularity, segment))
    }

    pub fn from_view(resolved: ViewSelection) -> Self {
        Self {
            resolved,
            edits: None,
        }
    }

    pub fn key(&self) -> (Granularity, Segment) {
        (self.resolved.granularity, self.resolved.segment)
    }

    /// Switches the selected key. Any manual edits are dropped when the key
    /// actually changes.
    pub fn select(&mut self, granularity: Granularity, segment: Segment) {
        if self.key() == (granularity, segment) {
            return;
        }
        if self.edits.take().is_some() {
            tracing::debug!(%granularity, %segment, "discarding manual edits");
        }
        self.resolved = resolver::resolve(granularity, segment);
    }

    pub fn current(&self) -> &ViewSelection {
        self.edits.as_ref().unwrap_or(&self.resolved)
    }

    pub fn resolved(&self) -> &ViewSelection {
        &self.resolved
    }

    pub fn is_edited(&self) -> bool {
        self.edits.is_some()
    }

    pub fn override_attendance(&mut self, series: Vec<AttendancePoint>) {
        self.edits_mut().attendance = series;
    }

    pub fn override_recruitment(&mut self, funnel: Vec<RecruitmentStage>) {
        self.edits_mut().recruitment = funnel;
    }

    pub fn override_violations(&mut self, violations: u32) {
        self.edits_mut().violations = violations;
    }

    /// Sets the present share of one bucket from raw form input.
    ///
    /// Returns `false` when no bucket carries `label`.
    pub fn edit_attendance(&mut self, label: &str, raw_percent: i64) -> bool {
        if !self.current().attendance.iter().any(|p| p.label() == label) {
            return false;
        }
        let percent = clamp_percent(raw_percent);
        if let Some(point) = self
            .edits_mut()
            .attendance
            .iter_mut()
            .find(|point| point.label() == label)
        {
            *point = AttendancePoint::new(label, percent);
        }
        true
    }

    pub fn edit_stage(&mut self, label: &str, raw_count: i64) -> bool {
        if !self.current().recruitment.iter().any(|s| s.label == label) {
            return false;
        }
        let count = clamp_count(raw_count);
        if let Some(stage) = self
            .edits_mut()
            .recruitment
            .iter_mut()
            .find(|stage| stage.label == label)
        {
            stage.count = count;
        }
        true
    }

    pub fn set_violations(&mut self, raw: i64) {
        self.override_violations(clamp_count(raw));
    }

    fn edits_mut(&mut self) -> &mut ViewSelection {
        let resolved = &self.resolved;
        self.edits.get_or_insert_with(|| resolved.clone())
    }
}

pub fn clamp_percent(raw: i64) -> u8 {
    // Lossless after clamping into 0..=100.
    raw.clamp(0, 100) as u8
}

pub fn clamp_count(raw: i64) -> u32 {
    u32::try_from(raw.max(0)).unwrap_or(u32::MAX)
}
