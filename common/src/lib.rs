//! Shared models and dashboard logic used by the frontend.

extern crate serde;


pub mod models;
pub mod endpoints;
pub mod config;
pub mod error;
pub mod grouping;
pub mod dashboard_state;
pub mod controller;
