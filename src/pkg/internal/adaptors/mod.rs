pub mod jobs;
pub mod sessions;
pub mod users;
