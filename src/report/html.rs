//! HTML email body
//!
//! Unlike the text summary, the change column shows the magnitude only; the
//! sign is carried by the arrow and the CSS class.

use super::{format_long_date, Direction, DATA_SOURCE, NOT_AVAILABLE};
use crate::types::{OisSnapshot, RateComparison, Tenor};
use std::fmt::Write;

const STYLE: &str = r#"        body {
            font-family: Arial, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 600px;
            margin: 0 auto;
            padding: 20px;
        }
        .header {
            background-color: #002147;
            color: white;
            padding: 20px;
            text-align: center;
            border-radius: 5px 5px 0 0;
        }
        .content {
            background-color: #f4f4f4;
            padding: 20px;
        }
        .rate-table {
            width: 100%;
            border-collapse: collapse;
            margin: 20px 0;
            background-color: white;
        }
        .rate-table th {
            background-color: #002147;
            color: white;
            padding: 12px;
            text-align: left;
        }
        .rate-table td {
            padding: 12px;
            border-bottom: 1px solid #ddd;
        }
        .positive {
            color: #28a745;
            font-weight: bold;
        }
        .negative {
            color: #dc3545;
            font-weight: bold;
        }
        .neutral {
            color: #6c757d;
            font-weight: bold;
        }
        .footer {
            text-align: center;
            padding: 20px;
            font-size: 12px;
            color: #666;
        }
        .date-info {
            background-color: white;
            padding: 15px;
            margin: 10px 0;
            border-left: 4px solid #002147;
        }
"#;

/// Change cell content and its CSS class: `("negative", "↓ 5.00")`
pub fn change_cell(change_bps: Option<f64>) -> (&'static str, String) {
    let direction = Direction::of(change_bps);
    let content = match change_bps {
        Some(change) => format!("{} {:.2}", direction.arrow(), change.abs()),
        None => NOT_AVAILABLE.to_string(),
    };
    (direction.css_class(), content)
}

fn format_rate(rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format!("{:.3}%", rate),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn write_row(out: &mut String, tenor: Tenor, rate: &RateComparison) {
    let (class, change) = change_cell(rate.change_bps);
    let _ = write!(
        out,
        r#"                <tr>
                    <td><strong>{}</strong></td>
                    <td>{}</td>
                    <td>{}</td>
                    <td class="{}">{}</td>
                </tr>
"#,
        tenor.label(),
        format_rate(rate.current),
        format_rate(rate.previous),
        class,
        change
    );
}

/// Render the HTML email body
pub fn render_html(snapshot: &OisSnapshot) -> String {
    let mut out = String::new();

    let _ = write!(
        out,
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <style>
{style}    </style>
</head>
<body>
    <div class="header">
        <h1>Bank of England OIS Rates</h1>
        <p>Daily Summary</p>
    </div>
    <div class="content">
        <div class="date-info">
            <strong>Latest Data:</strong> {latest}<br>
            <strong>Previous Data:</strong> {previous}
        </div>

        <table class="rate-table">
            <thead>
                <tr>
                    <th>Tenor</th>
                    <th>Current Rate</th>
                    <th>Previous Rate</th>
                    <th>Change (bps)</th>
                </tr>
            </thead>
            <tbody>
"#,
        style = STYLE,
        latest = format_long_date(snapshot.latest_date),
        previous = format_long_date(snapshot.previous_date),
    );

    for (tenor, rate) in &snapshot.rates {
        write_row(&mut out, *tenor, rate);
    }

    let _ = write!(
        out,
        r#"            </tbody>
        </table>
    </div>
    <div class="footer">
        <p>Data source: {}</p>
        <p>This is an automated daily summary of OIS rates.</p>
    </div>
</body>
</html>
"#,
        DATA_SOURCE
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn snapshot_with(change_bps: Option<f64>, previous: Option<f64>) -> OisSnapshot {
        let mut rates = BTreeMap::new();
        rates.insert(
            Tenor::FiveYear,
            RateComparison {
                current: Some(3.95),
                previous,
                change_bps,
            },
        );
        OisSnapshot {
            latest_date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            previous_date: NaiveDate::from_ymd_opt(2024, 6, 7).unwrap(),
            rates,
        }
    }

    #[test]
    fn test_change_cell_shows_magnitude_only() {
        assert_eq!(change_cell(Some(-5.0)), ("negative", "↓ 5.00".to_string()));
        assert_eq!(change_cell(Some(25.0)), ("positive", "↑ 25.00".to_string()));
        assert_eq!(change_cell(Some(0.0)), ("neutral", "→ 0.00".to_string()));
        assert_eq!(change_cell(None), ("neutral", "N/A".to_string()));
    }

    #[test]
    fn test_negative_row() {
        let html = render_html(&snapshot_with(Some(-5.0), Some(4.0)));
        assert!(html.contains(r#"<td class="negative">↓ 5.00</td>"#));
        assert!(html.contains("<td><strong>5yr</strong></td>"));
        assert!(html.contains("<td>3.950%</td>"));
        assert!(html.contains("<td>4.000%</td>"));
        assert!(!html.contains("-5.00"));
    }

    #[test]
    fn test_absent_change_row() {
        let html = render_html(&snapshot_with(None, None));
        assert!(html.contains(r#"<td class="neutral">N/A</td>"#));
        assert!(html.contains("<td>N/A</td>"));
    }

    #[test]
    fn test_document_frame() {
        let html = render_html(&snapshot_with(Some(1.0), Some(3.94)));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<strong>Latest Data:</strong> 10 June 2024<br>"));
        assert!(html.contains("<strong>Previous Data:</strong> 07 June 2024"));
        assert!(html.contains("<p>Data source: Bank of England</p>"));
        assert!(html.trim_end().ends_with("</html>"));
    }
}
