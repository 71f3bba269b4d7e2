//! API implementations

pub mod rest;
