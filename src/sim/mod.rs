//! 仿真核心模块
//!
//! 此模块包含调度仿真的核心组件，如仿真时间、进程记录、负载与仿真驱动。

// 子模块声明
mod error;
mod process;
mod schedule;
mod simulator;
mod time;
mod workload;

// 重新导出公共接口
pub use error::SimError;
pub use process::{MIN_PRIORITY, Process, ProcessId, validate};
pub use schedule::Schedule;
pub use simulator::Simulator;
pub use time::SimTime;
pub use workload::{
    GeneratorOpts, ProcessSpec, SCHEMA_VERSION, WorkloadMeta, WorkloadSpec, generate,
};
