pub mod durations;
pub mod games;
pub mod leaderboards;
pub mod refs;
pub mod runs;
pub mod stats;
pub mod users;
