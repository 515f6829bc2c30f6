use crate::datasets::{self, FunnelTable, SeriesTable};
use crate::models::{
    AttendancePoint, DepartmentScore, Granularity, KpiCard, PerformanceTier, RecruitmentStage,
    Segment, ViewSelection,
};

pub fn resolve(granularity: Granularity, segment: Segment) -> ViewSelection {
    match granularity {
        Granularity::Daily => build_view(
            granularity,
            segment,
            daily_series(segment),
            datasets::DEFAULT_FUNNEL,
            0,
        ),
        Granularity::Weekly => build_view(
            granularity,
            segment,
            datasets::WEEKLY_ATTENDANCE,
            datasets::WEEKLY_FUNNEL,
            datasets::WEEKLY_VIOLATIONS,
        ),
        Granularity::Monthly => build_view(
            granularity,
            segment,
            datasets::MONTHLY_ATTENDANCE,
            datasets::MONTHLY_FUNNEL,
            datasets::MONTHLY_VIOLATIONS,
        ),
    }
}

/// Resolves a view from a free-form segment label.
///
/// Labels that do not name a known department resolve as `All`, which under
/// the daily view means the default hourly series.
pub fn resolve_named(granularity: Granularity, segment_name: &str) -> ViewSelection {
    let segment = match segment_name.parse::<Segment>() {
        Ok(segment) => segment,
        Err(err) => {
            tracing::debug!(%err, "falling back to default segment");
            Segment::All
        }
    };
    resolve(granularity, segment)
}

fn daily_series(segment: Segment) -> SeriesTable {
    datasets::DAILY_BY_SEGMENT
        .iter()
        .find(|(key, _)| *key == segment)
        .map(|(_, table)| *table)
        .unwrap_or(datasets::DEFAULT_DAILY)
}

fn build_view(
    granularity: Granularity,
    segment: Segment,
    attendance: SeriesTable,
    recruitment: FunnelTable,
    violations: u32,
) -> ViewSelection {
    ViewSelection {
        granularity,
        segment,
        attendance: attendance
            .iter()
            .map(|(label, present)| AttendancePoint::new(*label, *present))
            .collect(),
        recruitment: recruitment
            .iter()
            .map(|(label, count)| RecruitmentStage::new(*label, *count))
            .collect(),
        violations,
    }
}

/// Mean present share, rounded half away from zero.
pub fn average_attendance(series: &[AttendancePoint]) -> Option<u8> {
    if series.is_empty() {
        return None;
    }

    let total: u64 = series
        .iter()
        .map(|point| u64::from(point.present_percent()))
        .sum();
    let count = series.len() as u64;
    let rounded = (2 * total + count) / (2 * count);
    u8::try_from(rounded).ok()
}

pub fn performance_tier(score: u8) -> PerformanceTier {
    match score {
        86.. => PerformanceTier::Strong,
        76..=85 => PerformanceTier::Watch,
        _ => PerformanceTier::AtRisk,
    }
}

pub fn department_scores() -> Vec<DepartmentScore> {
    datasets::DEPARTMENT_SCORES
        .iter()
        .map(|(department, score)| DepartmentScore {
            department: department.to_string(),
            score: *score,
            tier: performance_tier(*score),
        })
        .collect()
}

pub fn kpi_cards(view: &ViewSelection) -> Vec<KpiCard> {
    let attendance = average_attendance(&view.attendance)
        .map(|average| format!("{average}%"))
        .unwrap_or_else(|| "n/a".to_string());
    let (employees, employees_change) = datasets::TOTAL_EMPLOYEES;
    let (positions, positions_change) = datasets::OPEN_POSITIONS;

    vec![
        KpiCard {
            title: "Total Employees".to_string(),
            value: employees.to_string(),
            change: employees_change.to_string(),
        },
        KpiCard {
            title: "Attendance Rate".to_string(),
            value: attendance,
            change: "+2.1%".to_string(),
        },
        KpiCard {
            title: "Open Positions".to_string(),
            value: positions.to_string(),
            change: positions_change.to_string(),
        },
        KpiCard {
            title: "Policy Violations".to_string(),
            value: view.violations.to_string(),
            change: "-1".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presents(view: &ViewSelection) -> Vec<u8> {
        view.attendance
            .iter()
            .map(AttendancePoint::present_percent)
            .collect()
    }

    #[test]
    fn every_key_resolves_to_populated_series() {
        for granularity in Granularity::ALL {
            for segment in Segment::ALL {
                let view = resolve(granularity, segment);
                assert!(!view.attendance.is_empty(), "{granularity}/{segment}");
                assert!(!view.recruitment.is_empty(), "{granularity}/{segment}");
                for point in &view.attendance {
                    assert!(point.present_percent() <= 100);
                    assert_eq!(
                        u16::from(point.present_percent()) + u16::from(point.absent_percent()),
                        100
                    );
                }
            }
        }
    }

    #[test]
    fn weekly_and_monthly_ignore_segment() {
        for granularity in [Granularity::Weekly, Granularity::Monthly] {
            let baseline = resolve(granularity, Segment::All);
            for segment in Segment::ALL {
                let view = resolve(granularity, segment);
                assert_eq!(view.attendance, baseline.attendance);
                assert_eq!(view.recruitment, baseline.recruitment);
                assert_eq!(view.violations, baseline.violations);
            }
        }
    }

    #[test]
    fn daily_view_uses_default_funnel_and_no_violations() {
        let view = resolve(Granularity::Daily, Segment::Tech);
        assert_eq!(view.violations, 0);
        assert_eq!(view.recruitment.first().map(|s| s.count), Some(500));
        assert_eq!(presents(&view).first(), Some(&65));
    }

    #[test]
    fn hr_shares_the_default_daily_series() {
        let all = resolve(Granularity::Daily, Segment::All);
        let hr = resolve(Granularity::Daily, Segment::Hr);
        assert_eq!(all.attendance, hr.attendance);
        assert_ne!(
            all.attendance,
            resolve(Granularity::Daily, Segment::Sales).attendance
        );
    }

    #[test]
    fn unknown_segment_falls_back_to_default_daily_series() {
        let view = resolve_named(Granularity::Daily, "Legal");
        assert_eq!(view.segment, Segment::All);
        assert_eq!(
            view.attendance,
            resolve(Granularity::Daily, Segment::All).attendance
        );

        let named = resolve_named(Granularity::Daily, "ops");
        assert_eq!(named.segment, Segment::Ops);
    }

    #[test]
    fn weekly_average_rounds_half_up() {
        let view = resolve(Granularity::Weekly, Segment::All);
        assert_eq!(presents(&view), vec![88, 92, 90, 95, 93, 85]);
        assert_eq!(average_attendance(&view.attendance), Some(91));
    }

    #[test]
    fn average_ignores_point_order() {
        let mut series = resolve(Granularity::Daily, Segment::Sales).attendance;
        let forward = average_attendance(&series);
        series.reverse();
        series.rotate_left(3);
        assert_eq!(average_attendance(&series), forward);
        assert_eq!(average_attendance(&[]), None);
    }

    #[test]
    fn tiers_follow_score_thresholds() {
        assert_eq!(performance_tier(92), PerformanceTier::Strong);
        assert_eq!(performance_tier(86), PerformanceTier::Strong);
        assert_eq!(performance_tier(85), PerformanceTier::Watch);
        assert_eq!(performance_tier(76), PerformanceTier::Watch);
        assert_eq!(performance_tier(75), PerformanceTier::AtRisk);
    }

    #[test]
    fn kpis_reflect_selected_view() {
        let view = resolve(Granularity::Monthly, Segment::All);
        let cards = kpi_cards(&view);
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[1].value, "92%");
        assert_eq!(cards[3].value, "11");
        assert!(cards[0].is_positive());
        assert!(!cards[2].is_positive());
    }
}
