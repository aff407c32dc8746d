//! Train arrival coincidence server.
//!
//! A small web service that stores per-line arrival schedules and answers:
//! "after this time, when are two or more trains next in at once?"

pub mod config;
pub mod domain;
pub mod timetable;
pub mod web;
