//! 负载描述与生成
//!
//! `WorkloadSpec` 是 workload.json 的格式；`generate` 用调用方传入的随机数生成器产生随机负载。

use super::error::SimError;
use super::process::{self, MIN_PRIORITY, Process, ProcessId};
use super::time::SimTime;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadSpec {
    pub schema_version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<WorkloadMeta>,
    #[serde(default)]
    pub processes: Vec<ProcessSpec>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkloadMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// 文件中的单个进程。数值字段为有符号整数，负值由校验而不是解析器拒绝。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessSpec {
    pub id: ProcessId,
    #[serde(default)]
    pub arrival_time: i64,
    pub burst_time: i64,
    #[serde(default = "default_priority")]
    pub priority: i64,
}

fn default_priority() -> i64 {
    MIN_PRIORITY as i64
}

impl TryFrom<&ProcessSpec> for Process {
    type Error = SimError;

    fn try_from(spec: &ProcessSpec) -> Result<Self, Self::Error> {
        let arrival = u64::try_from(spec.arrival_time)
            .map_err(|_| SimError::invalid(spec.id, "arrival_time must not be negative"))?;
        let burst = u64::try_from(spec.burst_time)
            .ok()
            .filter(|&b| b > 0)
            .ok_or_else(|| SimError::invalid(spec.id, "burst_time must be positive"))?;
        let priority = u32::try_from(spec.priority)
            .ok()
            .filter(|&p| p >= MIN_PRIORITY)
            .ok_or_else(|| {
                SimError::invalid(spec.id, format!("priority must be at least {MIN_PRIORITY}"))
            })?;
        Ok(Process::new(spec.id, SimTime(arrival), burst, priority))
    }
}

impl TryFrom<&Process> for ProcessSpec {
    type Error = SimError;

    /// 文件格式使用有符号整数，超出 `i64` 的值无法写出。
    fn try_from(p: &Process) -> Result<Self, Self::Error> {
        let arrival_time = i64::try_from(p.arrival_time.ticks())
            .map_err(|_| SimError::invalid(p.id, "arrival_time does not fit in a workload file"))?;
        let burst_time = i64::try_from(p.burst_time)
            .map_err(|_| SimError::invalid(p.id, "burst_time does not fit in a workload file"))?;
        Ok(Self {
            id: p.id,
            arrival_time,
            burst_time,
            priority: i64::from(p.priority),
        })
    }
}

impl WorkloadSpec {
    pub fn from_processes(
        processes: &[Process],
        meta: Option<WorkloadMeta>,
    ) -> Result<Self, SimError> {
        Ok(Self {
            schema_version: SCHEMA_VERSION,
            meta,
            processes: processes
                .iter()
                .map(ProcessSpec::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }

    pub fn from_json(raw: &str) -> Result<Self, SimError> {
        let spec: WorkloadSpec = serde_json::from_str(raw)?;
        if spec.schema_version != SCHEMA_VERSION {
            return Err(SimError::UnsupportedSchema(spec.schema_version));
        }
        Ok(spec)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// 转换为进程列表并整体校验；任一进程非法则整份负载被拒绝。
    pub fn to_processes(&self) -> Result<Vec<Process>, SimError> {
        let processes = self
            .processes
            .iter()
            .map(Process::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        process::validate(&processes)?;
        Ok(processes)
    }
}

/// 随机负载的取值范围（均为闭区间）
#[derive(Debug, Clone)]
pub struct GeneratorOpts {
    pub processes: u32,
    pub arrival: RangeInclusive<u64>,
    pub burst: RangeInclusive<u64>,
    pub priority: RangeInclusive<u32>,
}

impl Default for GeneratorOpts {
    fn default() -> Self {
        Self {
            processes: 5,
            arrival: 0..=30,
            burst: 1..=21,
            priority: 1..=6,
        }
    }
}

/// 生成 `opts.processes` 个随机进程，id 从 1 开始连续编号。
///
/// 随机源由调用方提供，相同种子得到相同负载。
pub fn generate<R: Rng>(rng: &mut R, opts: &GeneratorOpts) -> Vec<Process> {
    (1..=opts.processes)
        .map(|id| {
            Process::new(
                id,
                SimTime(rng.random_range(opts.arrival.clone())),
                rng.random_range(opts.burst.clone()),
                rng.random_range(opts.priority.clone()),
            )
        })
        .collect()
}
