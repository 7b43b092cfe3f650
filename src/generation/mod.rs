pub mod filter;
pub mod partitioner;
pub mod simulator;
pub mod state;
