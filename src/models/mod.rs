pub mod field;
pub mod status;
pub mod task;
pub mod view;
