//! Route Handlers

pub mod assets;
pub mod batch;
pub mod pages;
pub mod predict;
