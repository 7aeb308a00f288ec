pub mod categories;
pub mod games;
pub mod platforms;
pub mod speedruns;
pub mod users;
