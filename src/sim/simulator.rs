//! 仿真器
//!
//! 离散时间驱动循环：接纳到达 → 老化 → 选择并运行到结束；就绪集为空时直接跳到下一个到达时刻。
//! 所有策略共用这一个循环。

use super::error::SimError;
use super::process::{self, Process};
use super::schedule::Schedule;
use super::time::SimTime;
use crate::queue::ReadySet;
use crate::sched::SchedPolicy;
use tracing::{debug, info, trace};

/// 仿真驱动：维护当前时间与本次运行的计数。
#[derive(Debug, Default)]
pub struct Simulator {
    now: SimTime,
    iterations: u64,
    idle_ticks: u64,
}

impl Simulator {
    /// 获取当前仿真时间
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// 主循环已执行的轮数（调度一次或跨过一段空闲各算一轮）
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// 用 `policy` 调度整份负载直到全部完成。
    ///
    /// 负载按值传入，每次运行拥有独立的副本。负载非法时在产生任何结果之前返回错误。
    #[tracing::instrument(skip(self, policy, processes), fields(policy = %policy.kind(), n = processes.len()))]
    pub fn run<P: SchedPolicy + ?Sized>(
        &mut self,
        policy: &mut P,
        mut processes: Vec<Process>,
    ) -> Result<Schedule, SimError> {
        process::validate(&processes)?;

        self.now = SimTime::ZERO;
        self.iterations = 0;
        self.idle_ticks = 0;

        info!("▶️  开始运行调度仿真");

        let mut ready = ReadySet::new(&processes);
        let mut order = Vec::with_capacity(processes.len());

        while !ready.is_drained() {
            self.iterations += 1;
            ready.admit(&processes, self.now);
            policy.age(&mut processes, ready.ready());

            let Some(idx) = policy.select(&processes, ready.ready()) else {
                // 就绪集为空时不会发生老化，直接跳到下一个到达时刻
                let next = ready
                    .next_arrival(&processes)
                    .map_or(self.now.after(1), |t| t.max(self.now.after(1)));
                trace!(now = %self.now, %next, pending = ready.pending(), "CPU 空闲");
                self.idle_ticks += next.since(self.now);
                self.now = next;
                continue;
            };

            ready.take(idx);
            let p = &mut processes[idx];
            let start = self.now;
            self.now = p.run_to_completion(start)?;
            order.push(p.id);

            debug!(
                pid = p.id,
                start = start.ticks(),
                end = self.now.ticks(),
                waiting = ?p.waiting_time,
                priority = p.priority,
                ready_left = ready.len(),
                "调度进程"
            );
        }

        info!(
            dispatched = order.len(),
            iterations = self.iterations,
            idle_ticks = self.idle_ticks,
            final_time = %self.now,
            "✅ 仿真完成"
        );

        Ok(Schedule {
            policy: policy.kind(),
            processes,
            order,
            makespan: self.now,
            idle_ticks: self.idle_ticks,
        })
    }
}
