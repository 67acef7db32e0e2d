pub mod quote;
pub mod root;
pub mod task;
