//! Transit delay risk server.
//!
//! A web application that answers: "How likely is a major delay here, and
//! which route between two stations is least likely to be delayed?"

pub mod config;
pub mod domain;
pub mod planner;
pub mod scorer;
pub mod topology;
pub mod web;
