pub mod error;
pub mod store;
pub mod task;

// Re-exports
pub use error::{Error, Result};
pub use store::TaskStore;
pub use task::Task;
