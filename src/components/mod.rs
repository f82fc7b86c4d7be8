pub mod chart;
pub mod dashboard;
pub mod status;
pub mod summary;
pub mod tables;

pub use dashboard::Dashboard;
pub use status::Status;
