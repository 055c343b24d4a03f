//! Command implementations for mazegraph

pub mod dispatch;
pub mod info;
pub mod search;
