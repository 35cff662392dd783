//! CLI command implementations.

mod config;
mod get;
mod list;
mod version;

pub use get::get;
pub use list::list;
pub use version::{version, version_string};

use chrono::{DateTime, FixedOffset, Utc};

/// Renders rows as space-aligned columns. Every cell except the last of
/// each row is padded to the widest cell of its column plus `padding`
/// spaces; the last cell is written as-is.
pub(crate) fn align_columns(rows: &[Vec<String>], padding: usize) -> String {
    let columns = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];

    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i + 1 < row.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            out.push_str(cell);
            if i + 1 < row.len() {
                let fill = widths[i] + padding - cell.chars().count();
                out.extend(std::iter::repeat_n(' ', fill));
            }
        }
        out.push('\n');
    }

    out
}

/// Formats an optional timestamp in the given timezone, or an empty
/// string when the API omitted it.
pub(crate) fn format_time(time: Option<DateTime<Utc>>, tz: &FixedOffset) -> String {
    time.map(|t| {
        t.with_timezone(tz)
            .format("%Y-%m-%d %H:%M:%S %z")
            .to_string()
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_align_columns_pads_all_but_last() {
        let rows = vec![
            vec!["A".to_string(), "B".to_string(), "C".to_string()],
            vec!["longer".to_string(), "x".to_string(), String::new()],
        ];

        let out = align_columns(&rows, 4);
        assert_eq!(out, "A         B    C\nlonger    x    \n");
    }

    #[test]
    fn test_align_columns_empty() {
        assert_eq!(align_columns(&[], 4), "");
    }

    #[test]
    fn test_format_time_in_timezone() {
        let t = Utc.with_ymd_and_hms(2017, 1, 12, 4, 51, 15).unwrap();
        let jst = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(
            format_time(Some(t), &jst),
            "2017-01-12 13:51:15 +0900"
        );
    }

    #[test]
    fn test_format_time_absent() {
        let utc = FixedOffset::east_opt(0).unwrap();
        assert_eq!(format_time(None, &utc), "");
    }
}
