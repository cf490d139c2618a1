//! Worker thread that runs catalog requests on behalf of the UI thread.

pub mod commands;
pub mod runtime;
