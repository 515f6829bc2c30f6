use std::fmt::Write;

use chrono::NaiveDate;

use crate::models::{RecruitmentStage, ViewSelection};
use crate::resolver;

pub fn stage_conversions(funnel: &[RecruitmentStage]) -> Vec<Option<f64>> {
    funnel
        .windows(2)
        .map(|pair| {
            if pair[0].count == 0 {
                None
            } else {
                Some(f64::from(pair[1].count) / f64::from(pair[0].count) * 100.0)
            }
        })
        .collect()
}

pub fn build_report(view: &ViewSelection, generated_on: NaiveDate, edited: bool) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# Executive HR Dashboard");
    let _ = writeln!(
        output,
        "Generated for {} ({} view) on {}",
        view.segment, view.granularity, generated_on
    );
    if edited {
        let _ = writeln!(output, "_Includes manual edits._");
    }
    let _ = writeln!(output);

    let _ = writeln!(output, "## Key Metrics");
    for card in resolver::kpi_cards(view) {
        let trend = if card.is_positive() { "up" } else { "down" };
        let _ = writeln!(
            output,
            "- {}: {} ({}, {})",
            card.title, card.value, card.change, trend
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Attendance");
    match resolver::average_attendance(&view.attendance) {
        Some(average) => {
            let _ = writeln!(output, "Average attendance {average}%");
        }
        None => {
            let _ = writeln!(output, "No attendance recorded for this view.");
        }
    }
    for point in &view.attendance {
        let _ = writeln!(
            output,
            "- {}: {}% present, {}% absent",
            point.label(),
            point.present_percent(),
            point.absent_percent()
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Recruitment Funnel");
    if view.recruitment.is_empty() {
        let _ = writeln!(output, "No recruitment activity for this view.");
    } else {
        let conversions = stage_conversions(&view.recruitment);
        for (index, stage) in view.recruitment.iter().enumerate() {
            let conversion = index
                .checked_sub(1)
                .and_then(|previous| conversions.get(previous).copied().flatten());
            match conversion {
                Some(rate) => {
                    let _ = writeln!(
                        output,
                        "- {}: {} ({:.1}% of previous stage)",
                        stage.label, stage.count, rate
                    );
                }
                None => {
                    let _ = writeln!(output, "- {}: {}", stage.label, stage.count);
                }
            }
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Department KPI Scores");
    for department in resolver::department_scores() {
        let _ = writeln!(
            output,
            "- {}: {} ({})",
            department.department, department.score, department.tier
        );
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::Dashboard;
    use crate::models::{Granularity, Segment};

    fn report_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    #[test]
    fn conversions_skip_empty_stages() {
        let funnel = vec![
            RecruitmentStage::new("Applied", 200),
            RecruitmentStage::new("Screened", 50),
            RecruitmentStage::new("Interviewed", 0),
            RecruitmentStage::new("Hired", 0),
        ];
        let conversions = stage_conversions(&funnel);
        assert_eq!(conversions.len(), 3);
        assert!((conversions[0].unwrap() - 25.0).abs() < 0.001);
        assert_eq!(conversions[1], Some(0.0));
        assert_eq!(conversions[2], None);
    }

    #[test]
    fn weekly_report_lists_every_section() {
        let dashboard = Dashboard::new(Granularity::Weekly, Segment::All);
        let report = build_report(dashboard.current(), report_date(), dashboard.is_edited());

        assert!(report.starts_with("# Executive HR Dashboard\n"));
        assert!(report.contains("Generated for All (weekly view) on 2026-03-02"));
        assert!(!report.contains("manual edits"));
        assert!(report.contains("- Attendance Rate: 91% (+2.1%, up)"));
        assert!(report.contains("- Policy Violations: 3 (-1, down)"));
        assert!(report.contains("Average attendance 91%"));
        assert!(report.contains("- Sat: 85% present, 15% absent"));
        assert!(report.contains("- Applied: 120\n"));
        assert!(report.contains("- Screened: 72 (60.0% of previous stage)"));
        assert!(report.contains("- Ops: 78 (watch)"));
        assert!(report.contains("- Tech: 92 (strong)"));
    }

    #[test]
    fn edited_report_is_flagged() {
        let mut dashboard = Dashboard::new(Granularity::Daily, Segment::Ops);
        assert!(dashboard.edit_attendance("09:00", 40));
        let report = build_report(dashboard.current(), report_date(), dashboard.is_edited());

        assert!(report.contains("_Includes manual edits._"));
        assert!(report.contains("- 09:00: 40% present, 60% absent"));
        assert!(report.contains("- Policy Violations: 0"));
    }
}
