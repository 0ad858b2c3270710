//! HTTP request handlers

pub mod forecast;

pub use forecast::*;
