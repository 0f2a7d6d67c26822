//! # duplicati-diff-sizes
//!
//! Library backing the `duplicati-diff-sizes` CLI tool. It answers one
//! question: how much disk space do the files modified between two Duplicati
//! backup snapshots take up right now?
//!
//! The pipeline is strictly sequential:
//!
//! 1. [`compare`] runs `duplicati-cli compare` and captures its report text
//! 2. [`parser`] splits the report into added/modified/deleted entry lists
//! 3. [`classify`] partitions entries into files and directories and reduces
//!    directories to leaves
//! 4. [`resolver`] checks the live filesystem and resolves byte sizes
//! 5. [`report`] renders the size-sorted, human-readable summary

pub mod classify;
pub mod compare;
pub mod config;
pub mod parser;
pub mod report;
pub mod resolver;
pub mod utils;
