//! 调度策略
//!
//! 每个策略只定义两件事：从就绪集中选出下一个进程的规则，以及（可选的）每轮老化步骤。
//! 仿真驱动对所有策略共用同一个循环。

mod priority_aging;
mod sjf;

pub use priority_aging::{DEFAULT_AGING_THRESHOLD, PriorityAging};
pub use sjf::ShortestJobFirst;

use crate::sim::{Process, SimError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 调度策略抽象
pub trait SchedPolicy: fmt::Debug {
    fn kind(&self) -> PolicyKind;

    /// 每轮选择之前对所有就绪进程调用一次；默认不做任何事。
    fn age(&mut self, _processes: &mut [Process], _ready: &[usize]) {}

    /// 返回被选中进程的 arena 下标；就绪集为空时返回 None。
    fn select(&self, processes: &[Process], ready: &[usize]) -> Option<usize>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    Sjf,
    Priority,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 2] = [PolicyKind::Sjf, PolicyKind::Priority];

    pub fn title(self) -> &'static str {
        match self {
            PolicyKind::Sjf => "Shortest Job First Scheduling",
            PolicyKind::Priority => "Priority Scheduling with Aging",
        }
    }

    /// 按配置构造策略实例。
    pub fn build(self, cfg: &PolicyConfig) -> Result<Box<dyn SchedPolicy>, SimError> {
        Ok(match self {
            PolicyKind::Sjf => Box::new(ShortestJobFirst),
            PolicyKind::Priority => Box::new(PriorityAging::new(cfg.aging_threshold)?),
        })
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PolicyKind::Sjf => "sjf",
            PolicyKind::Priority => "priority",
        })
    }
}

impl FromStr for PolicyKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sjf" | "shortest_job_first" => Ok(PolicyKind::Sjf),
            "priority" | "priority_aging" | "priority-aging" => Ok(PolicyKind::Priority),
            _ => Err(SimError::UnknownPolicy(s.to_string())),
        }
    }
}

/// 策略参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyConfig {
    pub aging_threshold: u32,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            aging_threshold: DEFAULT_AGING_THRESHOLD,
        }
    }
}

/// 解析命令行给出的策略名列表；`all` 展开为全部策略，重复项只保留第一次出现。
pub fn parse_policies<S: AsRef<str>>(raw: &[S]) -> Result<Vec<PolicyKind>, SimError> {
    if raw.is_empty() {
        return Ok(PolicyKind::ALL.to_vec());
    }
    let mut out = Vec::new();
    for name in raw {
        let kinds = if name.as_ref().trim().eq_ignore_ascii_case("all") {
            PolicyKind::ALL.to_vec()
        } else {
            vec![name.as_ref().parse()?]
        };
        for kind in kinds {
            if !out.contains(&kind) {
                out.push(kind);
            }
        }
    }
    Ok(out)
}
