//! Local storage module for the roster database
//!
//! This module provides database operations using SeaORM for:
//! - Teams
//! - Members
//! - Dynamic member search with paging

pub mod db;
pub mod members;
pub mod teams;

pub use db::{Storage, StorageError};
