pub mod alarm;
pub mod presenter;
