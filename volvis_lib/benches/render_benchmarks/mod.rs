//! Benchmark categories by threading

pub mod interactive;
pub mod multi_thread;
pub mod single_thread;
