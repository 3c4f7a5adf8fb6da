//! 结果报表
//!
//! - 文本：固定列宽的表格，外加平均等待/周转时间
//! - JSON：与表格同样的数据，便于脚本处理

mod table;

pub use table::{render_schedule, render_table};

use crate::sched::PolicyKind;
use crate::sim::{Process, ProcessId, Schedule};
use serde::{Deserialize, Serialize};

/// 报表中的一行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub id: ProcessId,
    pub arrival_time: u64,
    pub burst_time: u64,
    pub priority: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waiting_time: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turnaround_time: Option<u64>,
}

impl From<&Process> for ReportRow {
    fn from(p: &Process) -> Self {
        Self {
            id: p.id,
            arrival_time: p.arrival_time.ticks(),
            burst_time: p.burst_time,
            priority: p.priority,
            start_time: p.start_time.map(|t| t.ticks()),
            end_time: p.end_time.map(|t| t.ticks()),
            waiting_time: p.waiting_time,
            turnaround_time: p.turnaround_time(),
        }
    }
}

/// 按 id 排序的报表行
pub fn rows(processes: &[Process]) -> Vec<ReportRow> {
    let mut rows: Vec<ReportRow> = processes.iter().map(ReportRow::from).collect();
    rows.sort_by_key(|r| r.id);
    rows
}

/// 单个策略的结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyReport {
    pub policy: PolicyKind,
    pub order: Vec<ProcessId>,
    pub makespan: u64,
    pub idle_ticks: u64,
    pub avg_waiting_time: f64,
    pub avg_turnaround_time: f64,
    pub processes: Vec<ReportRow>,
}

impl From<&Schedule> for PolicyReport {
    fn from(s: &Schedule) -> Self {
        Self {
            policy: s.policy,
            order: s.order.clone(),
            makespan: s.makespan.ticks(),
            idle_ticks: s.idle_ticks,
            avg_waiting_time: s.avg_waiting_time(),
            avg_turnaround_time: s.avg_turnaround_time(),
            processes: rows(&s.processes),
        }
    }
}

/// 一次命令行运行的完整 JSON 输出
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub workload: Vec<ReportRow>,
    pub schedules: Vec<PolicyReport>,
}
