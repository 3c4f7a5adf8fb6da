//! Shortest Job First（非抢占）

use super::{PolicyKind, SchedPolicy};
use crate::sim::Process;

/// 选 burst 最短的就绪进程，同 burst 时取 id 最小者。没有老化步骤。
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestJobFirst;

impl SchedPolicy for ShortestJobFirst {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Sjf
    }

    fn select(&self, processes: &[Process], ready: &[usize]) -> Option<usize> {
        ready
            .iter()
            .copied()
            .min_by_key(|&i| (processes[i].burst_time, processes[i].id))
    }
}
