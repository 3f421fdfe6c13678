//! Process-level infrastructure.

pub mod lock;
