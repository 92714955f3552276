//! Room Occupancy Reporting for Academic Class Schedules
//!
//! This crate ingests a CSV export of class-scheduling data for one academic
//! term and derives, for each room and each weekday, which one-hour time
//! slots (7 AM through 10 PM) are occupied by at least one scheduled class.

#![warn(missing_docs)]

pub mod error;
pub mod filter;
pub mod input;
pub mod models;
pub mod occupancy;
pub mod pipeline;
pub mod report;
