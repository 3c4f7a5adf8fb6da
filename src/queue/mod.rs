//! 就绪集管理
//!
//! 负责在当前仿真时刻接纳到达的进程，并保存已接纳但尚未运行的进程。

mod ready_set;

pub use ready_set::ReadySet;
