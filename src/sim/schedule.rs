//! 调度结果

use super::process::{Process, ProcessId};
use super::time::SimTime;
use crate::sched::PolicyKind;

/// 一次仿真运行的完整输出。
#[derive(Debug, Clone)]
pub struct Schedule {
    pub policy: PolicyKind,
    /// 与输入同序的进程列表，时间字段均已填写
    pub processes: Vec<Process>,
    /// 按被选中先后排列的进程 id
    pub order: Vec<ProcessId>,
    /// 最后一个进程完成的时刻（空负载时为 0）
    pub makespan: SimTime,
    pub idle_ticks: u64,
}

impl Schedule {
    pub fn get(&self, id: ProcessId) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// 按 id 排序的进程副本，供报表使用
    pub fn sorted_by_id(&self) -> Vec<Process> {
        let mut out = self.processes.clone();
        out.sort_by_key(|p| p.id);
        out
    }

    pub fn avg_waiting_time(&self) -> f64 {
        mean(self.processes.iter().filter_map(|p| p.waiting_time))
    }

    pub fn avg_turnaround_time(&self) -> f64 {
        mean(self.processes.iter().filter_map(|p| p.turnaround_time()))
    }
}

fn mean(values: impl Iterator<Item = u64>) -> f64 {
    let (sum, n) = values.fold((0u64, 0u64), |(s, n), v| (s.saturating_add(v), n + 1));
    if n == 0 { 0.0 } else { sum as f64 / n as f64 }
}
