use crate::sim::SimTime;

#[test]
fn sim_time_after_and_since() {
    assert_eq!(SimTime::ZERO.after(5), SimTime(5));
    assert_eq!(SimTime(12).since(SimTime(5)), 7);
    assert_eq!(SimTime(12).ticks(), 12);
}

#[test]
fn sim_time_arithmetic_saturates() {
    assert_eq!(SimTime(u64::MAX).after(1), SimTime(u64::MAX));
    assert_eq!(SimTime(3).since(SimTime(10)), 0);
}

#[test]
fn sim_time_display_and_serde_are_plain_ticks() {
    assert_eq!(SimTime(42).to_string(), "t=42");
    assert_eq!(serde_json::to_string(&SimTime(42)).expect("serialize"), "42");
}

#[test]
fn sim_time_checked_after_detects_overflow() {
    assert_eq!(SimTime(5).checked_after(3), Some(SimTime(8)));
    assert_eq!(SimTime(u64::MAX - 1).checked_after(1), Some(SimTime(u64::MAX)));
    assert_eq!(SimTime(u64::MAX).checked_after(1), None);
}
