//! 进程记录
//!
//! 一个待调度的工作单元：负载属性在创建后不变，时间字段由仿真驱动在运行中写入一次。

use super::error::SimError;
use super::time::SimTime;
use std::collections::HashSet;

/// 进程标识符（同一负载内唯一，从 1 开始）
pub type ProcessId = u32;

/// 最高紧急度的优先级值；老化不会把优先级降到它以下。
pub const MIN_PRIORITY: u32 = 1;

/// 进程记录。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub id: ProcessId,
    /// 进程变为可调度的时刻
    pub arrival_time: SimTime,
    /// 一旦开始执行所需的总 CPU 时间（> 0）
    pub burst_time: u64,
    /// 数值越小越紧急；只有老化策略会修改它
    pub priority: u32,
    /// 非抢占模型下恒等于 `burst_time`
    pub remaining_time: u64,
    /// 自上次老化调整以来在就绪集中等待的轮数
    pub age: u32,
    pub start_time: Option<SimTime>,
    pub end_time: Option<SimTime>,
    pub waiting_time: Option<u64>,
}

impl Process {
    pub fn new(id: ProcessId, arrival_time: SimTime, burst_time: u64, priority: u32) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority,
            remaining_time: burst_time,
            age: 0,
            start_time: None,
            end_time: None,
            waiting_time: None,
        }
    }

    /// 周转时间 = 完成时刻 - 到达时刻；尚未调度时为 None。
    pub fn turnaround_time(&self) -> Option<u64> {
        self.end_time.map(|end| end.since(self.arrival_time))
    }

    pub fn is_finished(&self) -> bool {
        self.end_time.is_some()
    }

    /// 在 `now` 时刻把 CPU 交给该进程并一直运行到结束，返回完成时刻。
    ///
    /// 完成时刻超出 `u64` 时返回错误，记录保持未调度状态。
    pub(crate) fn run_to_completion(&mut self, now: SimTime) -> Result<SimTime, SimError> {
        debug_assert!(now >= self.arrival_time, "process {} dispatched before arrival", self.id);
        debug_assert!(self.start_time.is_none(), "process {} dispatched twice", self.id);

        let end = now
            .checked_after(self.burst_time)
            .ok_or(SimError::TimeOverflow { id: self.id, at: now })?;
        self.start_time = Some(now);
        self.end_time = Some(end);
        self.waiting_time = Some(now.since(self.arrival_time));
        Ok(end)
    }
}

/// 校验整份负载：burst 必须为正，优先级不低于 [`MIN_PRIORITY`]，id 不可重复。
pub fn validate(processes: &[Process]) -> Result<(), SimError> {
    let mut seen = HashSet::with_capacity(processes.len());
    for p in processes {
        if !seen.insert(p.id) {
            return Err(SimError::DuplicateId(p.id));
        }
        if p.burst_time == 0 {
            return Err(SimError::invalid(p.id, "burst_time must be positive"));
        }
        if p.priority < MIN_PRIORITY {
            return Err(SimError::invalid(
                p.id,
                format!("priority must be at least {MIN_PRIORITY}"),
            ));
        }
        if p.is_finished() {
            return Err(SimError::invalid(p.id, "process was already scheduled"));
        }
    }
    Ok(())
}
