pub mod client;
pub mod error;

// Re-exports
pub use client::{QuoteClient, QUOTES_URL};
pub use error::{Error, Result};
