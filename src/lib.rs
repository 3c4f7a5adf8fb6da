pub mod queue;
pub mod report;
pub mod sched;
pub mod sim;

#[cfg(test)]
mod test;
