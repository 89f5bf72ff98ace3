pub mod analyst;
pub mod client;
pub mod types;

pub use analyst::*;
pub use client::*;
pub use types::*;
