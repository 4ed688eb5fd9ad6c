pub mod config;
pub mod matcher;
pub mod reconcile;
pub mod storage;
