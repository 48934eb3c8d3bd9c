pub mod baseline;
pub mod engine;
pub mod extract;
pub mod providers;
pub mod rank;
pub mod search;
pub mod stats;
pub mod store;
pub mod summarize;
pub mod temporal;
pub mod types;
pub mod vocabulary;

pub use engine::MemoryEngine;
