use crate::sched::{
    DEFAULT_AGING_THRESHOLD, PolicyConfig, PolicyKind, PriorityAging, SchedPolicy,
    ShortestJobFirst, parse_policies,
};
use crate::sim::{Process, SimError, SimTime};

fn p(id: u32, burst: u64, priority: u32) -> Process {
    Process::new(id, SimTime::ZERO, burst, priority)
}

#[test]
fn sjf_selects_shortest_burst() {
    let ps = vec![p(1, 5, 1), p(2, 2, 1), p(3, 8, 1)];
    assert_eq!(ShortestJobFirst.select(&ps, &[0, 1, 2]), Some(1));
    assert_eq!(ShortestJobFirst.select(&ps, &[0, 2]), Some(0));
}

#[test]
fn sjf_breaks_ties_by_lowest_id_regardless_of_ready_order() {
    let ps = vec![p(7, 3, 1), p(2, 3, 1), p(5, 3, 1)];
    assert_eq!(ShortestJobFirst.select(&ps, &[0, 1, 2]), Some(1));
    assert_eq!(ShortestJobFirst.select(&ps, &[2, 0, 1]), Some(1));
}

#[test]
fn select_on_empty_ready_set_is_none() {
    let ps = vec![p(1, 1, 1)];
    assert_eq!(ShortestJobFirst.select(&ps, &[]), None);
    assert_eq!(PriorityAging::default().select(&ps, &[]), None);
}

#[test]
fn sjf_has_no_aging_step() {
    let mut ps = vec![p(1, 5, 4)];
    let mut sjf = ShortestJobFirst;
    for _ in 0..20 {
        sjf.age(&mut ps, &[0]);
    }
    assert_eq!(ps[0].age, 0);
    assert_eq!(ps[0].priority, 4);
}

#[test]
fn priority_selects_lowest_value_then_lowest_id() {
    let ps = vec![p(1, 1, 3), p(2, 1, 2), p(3, 1, 2)];
    let pol = PriorityAging::default();
    assert_eq!(pol.select(&ps, &[0, 1, 2]), Some(1));
    assert_eq!(pol.select(&ps, &[2, 0]), Some(2));
}

#[test]
fn aging_boosts_priority_every_threshold_rounds() {
    let mut ps = vec![p(1, 1, 5)];
    let mut pol = PriorityAging::default();
    assert_eq!(pol.threshold(), DEFAULT_AGING_THRESHOLD);

    for round in 1..=5 {
        pol.age(&mut ps, &[0]);
        assert_eq!(ps[0].age, round);
        assert_eq!(ps[0].priority, 5);
    }
    pol.age(&mut ps, &[0]);
    assert_eq!(ps[0].priority, 4);
    assert_eq!(ps[0].age, 0);

    for _ in 0..6 {
        pol.age(&mut ps, &[0]);
    }
    assert_eq!(ps[0].priority, 3);
}

#[test]
fn aging_never_goes_below_one_and_never_increases() {
    let mut ps = vec![p(1, 1, 2)];
    let mut pol = PriorityAging::new(1).expect("threshold 1");
    let mut last = ps[0].priority;
    for _ in 0..10 {
        pol.age(&mut ps, &[0]);
        assert!(ps[0].priority <= last);
        assert!(ps[0].priority >= 1);
        last = ps[0].priority;
    }
    assert_eq!(ps[0].priority, 1);
    assert_eq!(ps[0].age, 0);
}

#[test]
fn aging_only_touches_ready_processes() {
    let mut ps = vec![p(1, 1, 5), p(2, 1, 5)];
    let mut pol = PriorityAging::default();
    for _ in 0..6 {
        pol.age(&mut ps, &[1]);
    }
    assert_eq!((ps[0].priority, ps[0].age), (5, 0));
    assert_eq!(ps[1].priority, 4);
}

#[test]
fn zero_aging_threshold_is_rejected() {
    assert!(matches!(
        PriorityAging::new(0),
        Err(SimError::InvalidAgingThreshold)
    ));
    let cfg = PolicyConfig { aging_threshold: 0 };
    assert!(PolicyKind::Sjf.build(&cfg).is_ok());
    assert!(matches!(
        PolicyKind::Priority.build(&cfg),
        Err(SimError::InvalidAgingThreshold)
    ));
}

#[test]
fn policy_kind_parses_and_displays() {
    assert_eq!("sjf".parse::<PolicyKind>().expect("sjf"), PolicyKind::Sjf);
    assert_eq!(
        "Priority-Aging".parse::<PolicyKind>().expect("priority"),
        PolicyKind::Priority
    );
    assert_eq!(PolicyKind::Priority.to_string(), "priority");
    match "round_robin".parse::<PolicyKind>() {
        Err(SimError::UnknownPolicy(name)) => assert_eq!(name, "round_robin"),
        other => panic!("expected UnknownPolicy, got {other:?}"),
    }
}

#[test]
fn parse_policies_expands_all_and_dedups() {
    let none: [&str; 0] = [];
    assert_eq!(parse_policies(&none).expect("default"), PolicyKind::ALL);
    assert_eq!(
        parse_policies(&["priority", "all"]).expect("parse"),
        vec![PolicyKind::Priority, PolicyKind::Sjf]
    );
    assert!(matches!(
        parse_policies(&["sjf", "lottery"]),
        Err(SimError::UnknownPolicy(_))
    ));
}

#[test]
fn built_policies_report_their_kind() {
    let cfg = PolicyConfig::default();
    for kind in PolicyKind::ALL {
        assert_eq!(kind.build(&cfg).expect("build").kind(), kind);
    }
}
