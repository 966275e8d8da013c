//! Mood-based movie recommendation pipeline
//!
//! Classifies a free-text mood description into a canonical emotion, maps the
//! emotion to a set of target genres, and samples a deduplicated set of
//! movies gathered from the OMDb catalog via per-genre keyword search.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
