use std::io::Write;

use serde::Serialize;

use crate::models::ViewSelection;

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    section: &'a str,
    label: &'a str,
    value: u32,
}

/// Writes the attendance and funnel series of a view as flat CSV rows.
pub fn write_csv<W: Write>(view: &ViewSelection, writer: W) -> anyhow::Result<W> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for point in &view.attendance {
        csv_writer.serialize(ExportRow {
            section: "attendance_present",
            label: point.label(),
            value: u32::from(point.present_percent()),
        })?;
        csv_writer.serialize(ExportRow {
            section: "attendance_absent",
            label: point.label(),
            value: u32::from(point.absent_percent()),
        })?;
    }

    for stage in &view.recruitment {
        csv_writer.serialize(ExportRow {
            section: "recruitment",
            label: &stage.label,
            value: stage.count,
        })?;
    }

    csv_writer.serialize(ExportRow {
        section: "violations",
        label: "total",
        value: view.violations,
    })?;

    csv_writer
        .into_inner()
        .map_err(|err| anyhow::anyhow!("failed to flush CSV export: {}", err.error()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Granularity, Segment};
    use crate::resolver;

    #[test]
    fn monthly_export_has_header_and_rows() {
        let view = resolver::resolve(Granularity::Monthly, Segment::All);
        let bytes = write_csv(&view, Vec::new()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "section,label,value");
        assert_eq!(lines[1], "attendance_present,Week 1,91");
        assert_eq!(lines[2], "attendance_absent,Week 1,9");
        assert!(lines.contains(&"recruitment,Hired,64"));
        assert_eq!(lines.last(), Some(&"violations,total,11"));
        assert_eq!(lines.len(), 1 + 4 * 2 + 5 + 1);
    }
}
