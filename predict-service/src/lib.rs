//! Predict Service - query answering over a preloaded retrieval index.

pub mod config;
pub mod dtos;
pub mod handlers;
pub mod model;
pub mod startup;
