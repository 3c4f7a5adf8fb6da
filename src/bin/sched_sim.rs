//! 调度仿真命令行
//!
//! 生成（或读取）一份负载，按所选策略各自在独立副本上运行一次，并输出报表。

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use schedsim_rs::report::{self, PolicyReport, RunReport};
use schedsim_rs::sched::{self, PolicyConfig, SchedPolicy};
use schedsim_rs::sim::{
    GeneratorOpts, Process, Schedule, SimError, Simulator, WorkloadMeta, WorkloadSpec, generate,
};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "sched-sim",
    about = "非抢占 CPU 调度仿真：SJF 与带老化的优先级调度"
)]
struct Args {
    /// 随机生成的进程数
    #[arg(long, default_value_t = 5)]
    processes: u32,

    /// 随机种子；不指定时随机选取
    #[arg(long)]
    seed: Option<u64>,

    /// 调度策略：sjf、priority 或 all（可重复）
    #[arg(long = "policy")]
    policies: Vec<String>,

    /// 从 workload.json 读取负载，而不是随机生成
    #[arg(long)]
    workload: Option<PathBuf>,

    /// 把本次使用的负载写入 JSON 文件（可用 --workload 重放）
    #[arg(long)]
    dump_workload: Option<PathBuf>,

    /// 优先级老化阈值（等待多少轮提升一级）
    #[arg(long, default_value_t = sched::DEFAULT_AGING_THRESHOLD)]
    aging_threshold: u32,

    /// 以 JSON 输出结果
    #[arg(long)]
    json: bool,

    /// 关闭日志输出
    #[arg(long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(if args.quiet {
            tracing_subscriber::EnvFilter::new("off")
        } else {
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
        })
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), SimError> {
    // 策略配置错误必须在任何仿真开始之前暴露
    let kinds = sched::parse_policies(&args.policies)?;
    let cfg = PolicyConfig {
        aging_threshold: args.aging_threshold,
    };
    let mut policies = kinds
        .iter()
        .map(|k| k.build(&cfg))
        .collect::<Result<Vec<_>, _>>()?;

    let (workload, seed) = load_or_generate(&args)?;

    if let Some(path) = &args.dump_workload {
        let meta = WorkloadMeta {
            source: Some("sched-sim".to_string()),
            seed,
        };
        let spec = WorkloadSpec::from_processes(&workload, Some(meta))?;
        fs::write(path, serde_json::to_string_pretty(&spec)?)?;
        eprintln!("wrote workload to {}", path.display());
    }

    let mut schedules = Vec::with_capacity(policies.len());
    for policy in policies.iter_mut() {
        schedules.push(run_policy(&mut **policy, &workload)?);
    }

    if args.json {
        let out = RunReport {
            seed,
            workload: report::rows(&workload),
            schedules: schedules.iter().map(PolicyReport::from).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    match (&args.workload, seed) {
        (None, Some(seed)) => println!("=== Generated Processes (seed={seed}) ==="),
        _ => println!("=== Loaded Processes ==="),
    }
    print!("{}", report::render_table(&report::rows(&workload)));
    for schedule in &schedules {
        print!("{}", report::render_schedule(schedule));
        println!(
            "order={:?} makespan={}",
            schedule.order,
            schedule.makespan.ticks()
        );
    }
    Ok(())
}

/// 每个策略都在负载的独立副本上运行
fn run_policy(
    policy: &mut dyn SchedPolicy,
    workload: &[Process],
) -> Result<Schedule, SimError> {
    tracing::info!(policy = %policy.kind(), "运行调度策略");
    Simulator::default().run(policy, workload.to_vec())
}

fn load_or_generate(args: &Args) -> Result<(Vec<Process>, Option<u64>), SimError> {
    if let Some(path) = &args.workload {
        let spec = WorkloadSpec::load(path)?;
        let seed = spec.meta.as_ref().and_then(|m| m.seed);
        return Ok((spec.to_processes()?, seed));
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let opts = GeneratorOpts {
        processes: args.processes,
        ..GeneratorOpts::default()
    };
    Ok((generate(&mut rng, &opts), Some(seed)))
}
