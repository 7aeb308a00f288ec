pub mod games;
pub mod leaderboards;
pub mod moderation;
pub mod speedruns;
pub mod static_refs;
pub mod stats;
pub mod users;
