pub mod display;
pub mod menu;
pub mod reporting;
