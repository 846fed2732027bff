// src/lib.rs

//! Jukebox Resolver Library

pub mod error;
pub mod fetch;
#[cfg(feature = "lambda")]
pub mod lambda;
pub mod models;
pub mod pipeline;
pub mod services;
