use super::aggregate::total_commits;
use crate::model::{HeatBucket, HeatOutput, SCHEMA_VERSION};
use anyhow::Result;
use chrono::{Datelike, Duration, NaiveDate, Utc, Weekday};
use console::style;
use std::collections::HashMap;
use std::path::Path;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn output_json(buckets: &[HeatBucket], repo_path: &Path, start: NaiveDate, end: NaiveDate) -> Result<()> {
    let output = HeatOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository_path: repo_path.to_string_lossy().to_string(),
        start,
        end,
        total_commits: total_commits(buckets),
        buckets: buckets.to_vec(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_ndjson(buckets: &[HeatBucket]) -> Result<()> {
    for bucket in buckets {
        println!("{}", serde_json::to_string(bucket)?);
    }
    Ok(())
}

/// Weekday × week grid, one column per ISO week, Monday on top.
pub fn output_calendar(buckets: &[HeatBucket], start: NaiveDate, end: NaiveDate) {
    let counts: HashMap<NaiveDate, u32> = buckets.iter().map(|b| (b.day, b.commit_count)).collect();
    let max = buckets.iter().map(|b| b.commit_count).max().unwrap_or(0);
    let first_monday = week_start(start);
    let weeks = ((week_start(end) - first_monday).num_days() / 7 + 1) as usize;

    println!("{}", style("Commit Activity Heatmap").bold());
    println!("{} → {}", start, end);
    println!("{}", "─".repeat(50));
    println!("    {}", month_header(first_monday, weeks));

    for (row, weekday) in WEEKDAYS.iter().enumerate() {
        let label = if row % 2 == 0 { format!("{weekday}") } else { String::new() };
        let mut line = format!("{label:<4}");

        for week in 0..weeks {
            let day = first_monday + Duration::days((week * 7 + row) as i64);
            if day < start || day > end {
                line.push_str("  ");
                continue;
            }
            let count = counts.get(&day).copied().unwrap_or(0);
            line.push_str(&glyph(intensity(count, max)));
            line.push(' ');
        }
        println!("{}", line.trim_end());
    }

    let active = buckets.iter().filter(|b| b.commit_count > 0).count();
    println!(
        "\n{} commits on {} of {} days, busiest day {}",
        style(total_commits(buckets)).green(),
        active,
        buckets.len(),
        max
    );
    println!(
        "{} less {} more",
        style("Legend").bold(),
        [0, 1, 2, 3, 4].iter().map(|&l| glyph(l)).collect::<Vec<_>>().join(" ")
    );
}

fn week_start(day: NaiveDate) -> NaiveDate {
    day - Duration::days(i64::from(day.weekday().num_days_from_monday()))
}

/// Map a day's count onto five levels relative to the busiest day.
fn intensity(count: u32, max: u32) -> u32 {
    if count == 0 || max == 0 {
        return 0;
    }
    (count * 4).div_ceil(max).clamp(1, 4)
}

fn glyph(level: u32) -> String {
    match level {
        0 => style("·").dim().to_string(),
        1 => style("░").green().to_string(),
        2 => style("▒").green().to_string(),
        3 => style("▓").green().to_string(),
        _ => style("█").green().to_string(),
    }
}

fn month_header(first_monday: NaiveDate, weeks: usize) -> String {
    let mut header = String::new();
    let mut last_month = None;

    for week in 0..weeks {
        let monday = first_monday + Duration::days((week * 7) as i64);
        let col = week * 2;
        if last_month != Some(monday.month()) && header.chars().count() <= col {
            while header.chars().count() < col {
                header.push(' ');
            }
            header.push_str(&monday.format("%b").to_string());
            last_month = Some(monday.month());
        }
    }
    header
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_levels() {
        assert_eq!(intensity(0, 5), 0);
        assert_eq!(intensity(1, 5), 1);
        assert_eq!(intensity(3, 5), 3);
        assert_eq!(intensity(5, 5), 4);
        assert_eq!(intensity(1, 40), 1);
        assert_eq!(intensity(0, 0), 0);
    }

    #[test]
    fn weeks_start_on_monday() {
        let sunday = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        assert_eq!(week_start(sunday).to_string(), "2024-06-24");
        let monday = NaiveDate::from_ymd_opt(2024, 6, 24).unwrap();
        assert_eq!(week_start(monday), monday);
    }

    #[test]
    fn month_header_labels_each_month_once() {
        let first = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let header = month_header(first, 13);
        assert!(header.starts_with("Jan"));
        assert_eq!(header.matches("Feb").count(), 1);
        assert_eq!(header.matches("Mar").count(), 1);
    }
}
