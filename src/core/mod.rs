pub mod duration;
pub mod log;
pub mod store;
pub mod totals;
pub mod view;
