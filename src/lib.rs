//! Dais - Committee Session Core for Simulated Deliberative Assemblies
//!
//! This crate implements the session-management core of a Model-UN style
//! conference manager: delegate rosters and attendance, procedural motion
//! intake and validation, configurable motion ordering, and speaker queues.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
