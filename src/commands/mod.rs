//! Command implementations for qcrack

pub mod compare;
pub mod cost;
pub mod crack;
pub mod dispatch;
pub mod helpers;
pub mod predict;
pub mod search;
