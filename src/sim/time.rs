//! 仿真时间类型
//!
//! 定义离散仿真时钟。时间单位为 tick，与墙钟无关。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 仿真时间（tick）。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    /// 向后推进 `ticks` 个时间单位（饱和加法）。
    pub fn after(self, ticks: u64) -> SimTime {
        SimTime(self.0.saturating_add(ticks))
    }

    /// 向后推进 `ticks`，溢出时返回 None。
    pub fn checked_after(self, ticks: u64) -> Option<SimTime> {
        self.0.checked_add(ticks).map(SimTime)
    }

    /// 距离 `earlier` 经过的 tick 数；若 `earlier` 更晚则为 0。
    pub fn since(self, earlier: SimTime) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    pub fn ticks(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={}", self.0)
    }
}
