//! Subway route finder server.
//!
//! Keeps an editable network of stations and lines in memory and answers
//! shortest-path queries between any two stations over it.

pub mod config;
pub mod domain;
pub mod path;
pub mod store;
pub mod web;
