//! 就绪集
//!
//! 负载只保存一份（调用方持有的 `Vec<Process>`，即 arena）；
//! 未到达池和就绪集都只保存指向 arena 的下标，写回时间字段时直接落在原记录上。

use crate::sim::{Process, SimTime};
use tracing::trace;

#[derive(Debug, Default)]
pub struct ReadySet {
    /// 按 (arrival_time, id) 排序的 arena 下标，`cursor` 之前的已被接纳
    pending: Vec<usize>,
    cursor: usize,
    ready: Vec<usize>,
}

impl ReadySet {
    pub fn new(processes: &[Process]) -> Self {
        let mut pending: Vec<usize> = (0..processes.len()).collect();
        pending.sort_by_key(|&i| (processes[i].arrival_time, processes[i].id));
        Self {
            pending,
            cursor: 0,
            ready: Vec::with_capacity(processes.len()),
        }
    }

    /// 把所有 `arrival_time <= now` 的进程移入就绪集，返回本次接纳的数量。
    ///
    /// 每个进程只会被接纳一次：游标只前进不后退。
    pub fn admit(&mut self, processes: &[Process], now: SimTime) -> usize {
        let start = self.cursor;
        while let Some(&idx) = self.pending.get(self.cursor) {
            if processes[idx].arrival_time > now {
                break;
            }
            trace!(pid = processes[idx].id, %now, "进程到达，加入就绪集");
            self.ready.push(idx);
            self.cursor += 1;
        }
        self.cursor - start
    }

    /// 下一个尚未到达进程的到达时刻
    pub fn next_arrival(&self, processes: &[Process]) -> Option<SimTime> {
        self.pending
            .get(self.cursor)
            .map(|&idx| processes[idx].arrival_time)
    }

    /// 从就绪集中移除 arena 下标 `idx`；不存在时返回 false。
    pub fn take(&mut self, idx: usize) -> bool {
        match self.ready.iter().position(|&i| i == idx) {
            Some(pos) => {
                self.ready.swap_remove(pos);
                true
            }
            None => false,
        }
    }

    /// 当前就绪进程的 arena 下标（顺序无意义）
    pub fn ready(&self) -> &[usize] {
        &self.ready
    }

    pub fn len(&self) -> usize {
        self.ready.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ready.is_empty()
    }

    /// 尚未到达的进程数
    pub fn pending(&self) -> usize {
        self.pending.len() - self.cursor
    }

    /// 未到达池与就绪集都已清空
    pub fn is_drained(&self) -> bool {
        self.pending() == 0 && self.ready.is_empty()
    }
}
