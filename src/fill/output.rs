use crate::model::{CommitRecord, FillOutput, FillPlan, SCHEMA_VERSION};
use anyhow::Result;
use chrono::Utc;
use console::style;

pub fn output_json(
    plan: &FillPlan,
    repository_path: Option<String>,
    dry_run: bool,
    seed: Option<u64>,
) -> Result<()> {
    let output = FillOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository_path,
        dry_run,
        seed,
        total_commits: plan.total_commits(),
        plan: plan.clone(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_plan_ndjson(plan: &FillPlan) -> Result<()> {
    for day in &plan.days {
        println!("{}", serde_json::to_string(day)?);
    }
    Ok(())
}

pub fn commit_ndjson(record: &CommitRecord) -> Result<String> {
    Ok(serde_json::to_string(record)?)
}

pub fn commit_line(record: &CommitRecord) -> String {
    format!("Committed on {}", record.timestamp)
}

pub fn output_plan_text(plan: &FillPlan) {
    println!("{}", style("Planned commits").bold());
    println!("{}", "─".repeat(50));

    for day in plan.days.iter().filter(|d| d.commits > 0) {
        println!(
            "{} {} {}",
            day.timestamp_arg(),
            style("■".repeat(day.commits as usize)).green(),
            day.commits
        );
    }

    output_summary(plan, plan.total_commits(), true);
}

pub fn output_summary(plan: &FillPlan, made: u32, dry_run: bool) {
    let verb = if dry_run { "would create" } else { "created" };
    println!(
        "\n{} {} {} commits on {} of {} days ({} → {})",
        style("Summary:").bold(),
        verb,
        style(made).green(),
        plan.active_days(),
        plan.days.len(),
        plan.start.date(),
        plan.end.date()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_line_matches_progress_format() {
        let record = CommitRecord {
            timestamp: "2024-02-03T04:05:06".to_string(),
            message: "update heatmap".to_string(),
        };
        assert_eq!(commit_line(&record), "Committed on 2024-02-03T04:05:06");
        assert_eq!(
            commit_ndjson(&record).unwrap(),
            r#"{"timestamp":"2024-02-03T04:05:06","message":"update heatmap"}"#
        );
    }
}
