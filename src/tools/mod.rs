//! Lookup tools implementation

pub mod info;
pub mod interactive;
pub mod normativa;
pub mod query;
