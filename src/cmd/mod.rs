pub mod compare;
pub mod estimate;
pub mod modes;
