//! 带老化的优先级调度（非抢占）
//!
//! 每轮选择之前，就绪集中的每个进程 `age += 1`；达到阈值时优先级值减 1（不低于
//! [`MIN_PRIORITY`]）并把 `age` 清零。老化在选择之前进行，因此进程可以在被选中的
//! 那一轮刚好得到提升。

use super::{PolicyKind, SchedPolicy};
use crate::sim::{MIN_PRIORITY, Process, SimError};
use tracing::trace;

pub const DEFAULT_AGING_THRESHOLD: u32 = 6;

#[derive(Debug, Clone, Copy)]
pub struct PriorityAging {
    threshold: u32,
}

impl PriorityAging {
    pub fn new(threshold: u32) -> Result<Self, SimError> {
        if threshold == 0 {
            return Err(SimError::InvalidAgingThreshold);
        }
        Ok(Self { threshold })
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }
}

impl Default for PriorityAging {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_AGING_THRESHOLD,
        }
    }
}

impl SchedPolicy for PriorityAging {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Priority
    }

    fn age(&mut self, processes: &mut [Process], ready: &[usize]) {
        for &i in ready {
            let p = &mut processes[i];
            p.age = p.age.saturating_add(1);
            if p.age >= self.threshold {
                let boosted = p.priority.saturating_sub(1).max(MIN_PRIORITY);
                trace!(pid = p.id, from = p.priority, to = boosted, "老化提升优先级");
                p.priority = boosted;
                p.age = 0;
            }
        }
    }

    fn select(&self, processes: &[Process], ready: &[usize]) -> Option<usize> {
        ready
            .iter()
            .copied()
            .min_by_key(|&i| (processes[i].priority, processes[i].id))
    }
}
