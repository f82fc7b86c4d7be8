pub mod entries;
pub mod error;
pub mod stats;
pub mod view_model;
