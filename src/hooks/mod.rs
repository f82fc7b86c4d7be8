pub mod use_dashboard;
