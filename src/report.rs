//! Plain-text report rendering.
//!
//! Pure string builders for workload tables, Gantt charts, per-run metric
//! tables, and discipline comparisons. No I/O happens here; callers decide
//! where the text goes.

use crate::compare::Comparison;
use crate::metrics::RunKpi;
use crate::models::{Process, SimulationOutcome, Timeline};

/// Renders the input process set as a bordered table.
pub fn workload_table(processes: &[Process]) -> String {
    let border = "+------------+--------------+------------+----------+\n";
    let mut out = String::from(border);
    out.push_str(&format!(
        "| {:<10} | {:<12} | {:<10} | {:<8} |\n",
        "Process", "Arrival Time", "Burst Time", "Priority"
    ));
    out.push_str(border);
    for p in processes {
        out.push_str(&format!(
            "| {:<10} | {:>12} | {:>10} | {:>8} |\n",
            format!("P{}", p.id),
            p.arrival_time,
            p.burst_time,
            p.priority
        ));
    }
    out.push_str(border);
    out
}

/// Renders a timeline as a two-row Gantt chart: one row of process cells,
/// one row of segment boundary times.
pub fn gantt_chart(timeline: &Timeline) -> String {
    if timeline.is_empty() {
        return String::from("(no execution)\n");
    }

    let mut cells = String::from("|");
    let mut times = String::new();
    // First boundary sits under the leading "|".
    let first_start = timeline.segments[0].start.to_string();
    times.push_str(&first_start);

    for segment in &timeline.segments {
        let cell = format!(" P{} |", segment.process_id);
        cells.push_str(&cell);
        times.push_str(&format!("{:>width$}", segment.end, width = cell.len()));
    }

    format!("{cells}\n{times}\n")
}

/// Renders one run's per-process metrics and averages.
pub fn metrics_table(outcome: &SimulationOutcome) -> String {
    let kpi = RunKpi::calculate(outcome);
    let border = "+------------+------------+-----------------+--------------+\n";
    let mut out = format!("{}:\n", outcome.discipline);
    out.push_str(border);
    out.push_str(&format!(
        "| {:<10} | {:<10} | {:<15} | {:<12} |\n",
        "Process", "Completion", "Turnaround Time", "Waiting Time"
    ));
    out.push_str(border);
    for m in &outcome.metrics {
        out.push_str(&format!(
            "| {:<10} | {:>10} | {:>15} | {:>12} |\n",
            format!("P{}", m.process_id),
            m.completion_time,
            m.turnaround_time,
            m.waiting_time
        ));
    }
    out.push_str(border);
    out.push_str(&format!(
        "Average Turnaround Time: {:.2}\n",
        kpi.avg_turnaround_time
    ));
    out.push_str(&format!("Average Waiting Time: {:.2}\n", kpi.avg_waiting_time));
    out
}

/// Renders the discipline comparison, marking every entry tied for the
/// minimum total time.
pub fn comparison_table(comparison: &Comparison) -> String {
    let best: Vec<&str> = comparison
        .best()
        .iter()
        .map(|e| e.outcome.discipline.as_str())
        .collect();

    let border = "+-------------+------------+-------------+----------------+----------+\n";
    let mut out = String::from(border);
    out.push_str(&format!(
        "| {:<11} | {:<10} | {:<11} | {:<14} | {:<8} |\n",
        "Discipline", "Total Time", "Avg Waiting", "Avg Turnaround", "Makespan"
    ));
    out.push_str(border);
    for entry in &comparison.entries {
        let name = entry.outcome.discipline.as_str();
        let marker = if best.contains(&name) { " *" } else { "" };
        out.push_str(&format!(
            "| {:<11} | {:>10} | {:>11.2} | {:>14.2} | {:>8} |\n",
            format!("{name}{marker}"),
            entry.kpi.total_time,
            entry.kpi.avg_waiting_time,
            entry.kpi.avg_turnaround_time,
            entry.kpi.makespan
        ));
    }
    out.push_str(border);
    out.push_str(&format!("Best discipline(s): {}\n", best.join(", ")));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::run_all;
    use crate::disciplines::{Discipline, Fcfs};
    use crate::models::Segment;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5).with_priority(2),
            Process::new(2, 1, 3).with_priority(1),
            Process::new(3, 2, 1).with_priority(3),
        ]
    }

    #[test]
    fn test_workload_table() {
        let table = workload_table(&sample_processes());
        assert!(table.contains("| Process"));
        assert!(table.contains("Arrival Time"));
        assert!(table.contains("| P1"));
        assert!(table.contains("| P3"));
        // Bordered top, header separator, and bottom.
        assert_eq!(table.matches("+------------+").count(), 3);
    }

    #[test]
    fn test_gantt_chart_sample() {
        let outcome = Fcfs.run(&sample_processes());
        let chart = gantt_chart(&outcome.timeline);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "| P1 | P2 | P3 |");
        // Boundaries 0, 5, 8, 9 in order.
        let boundaries: Vec<&str> = lines[1].split_whitespace().collect();
        assert_eq!(boundaries, vec!["0", "5", "8", "9"]);
    }

    #[test]
    fn test_gantt_chart_starts_at_first_segment() {
        let mut timeline = Timeline::new();
        timeline.push(Segment::new(1, 4, 6));
        let chart = gantt_chart(&timeline);
        assert!(chart.starts_with("| P1 |\n4"));
    }

    #[test]
    fn test_gantt_chart_empty() {
        assert_eq!(gantt_chart(&Timeline::new()), "(no execution)\n");
    }

    #[test]
    fn test_metrics_table() {
        let outcome = Fcfs.run(&sample_processes());
        let table = metrics_table(&outcome);
        assert!(table.starts_with("FCFS:\n"));
        assert!(table.contains("Turnaround Time"));
        assert!(table.contains("Average Turnaround Time: 6.33"));
        assert!(table.contains("Average Waiting Time: 3.33"));
    }

    #[test]
    fn test_comparison_table_marks_best() {
        let comparison = run_all(&sample_processes(), 2);
        let table = comparison_table(&comparison);
        assert!(table.contains("SRTF *"));
        assert!(!table.contains("FCFS *"));
        assert!(table.contains("Best discipline(s): SRTF"));
    }
}
