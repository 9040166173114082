//! repo-facade: a backend facade for creating GitHub repositories.
//!
//! A library for forwarding repository creation requests to the GitHub
//! REST API and normalizing every upstream outcome into one result shape.

pub mod config;
pub mod github;
pub mod server;
pub mod service;
pub mod transport;
