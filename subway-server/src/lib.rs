//! Subway route planner server.
//!
//! Finds routes between stations of a multi-line subway network, by
//! shortest distance, shortest riding time, or earliest arrival against
//! line timetables, and prices them under a distance-tiered fare policy.

pub mod config;
pub mod domain;
pub mod fare;
pub mod graph;
pub mod network;
pub mod path;
pub mod planner;
pub mod timetable;
pub mod web;
