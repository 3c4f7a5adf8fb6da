mod policies;
mod sim_time;
