use super::{ReportRow, rows};
use crate::sim::Schedule;

const HEADERS: [(&str, usize); 6] = [
    ("ID", 5),
    ("Arrival Time", 15),
    ("Burst Time", 15),
    ("Priority", 10),
    ("Waiting Time", 15),
    ("Turnaround Time", 17),
];

fn cell(v: Option<u64>) -> String {
    v.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// 渲染进程表；尚未调度的进程在等待/周转列显示 `-`。
pub fn render_table(rows: &[ReportRow]) -> String {
    let mut out = String::new();
    for (name, width) in HEADERS {
        out.push_str(&format!("{name:>width$}"));
    }
    out.push('\n');

    for r in rows {
        let cols = [
            r.id.to_string(),
            r.arrival_time.to_string(),
            r.burst_time.to_string(),
            r.priority.to_string(),
            cell(r.waiting_time),
            cell(r.turnaround_time),
        ];
        for ((_, width), col) in HEADERS.iter().zip(cols) {
            out.push_str(&format!("{col:>width$}", width = *width));
        }
        out.push('\n');
    }
    out
}

/// 渲染某个策略的结果：标题、表格、平均值。
pub fn render_schedule(schedule: &Schedule) -> String {
    let mut out = format!("\n=== {} ===\n", schedule.policy.title());
    out.push_str(&render_table(&rows(&schedule.processes)));
    out.push_str(&format!(
        "Average waiting time: {:.2}\nAverage turnaround time: {:.2}\n",
        schedule.avg_waiting_time(),
        schedule.avg_turnaround_time()
    ));
    out
}
