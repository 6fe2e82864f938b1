//! Wire models for the forwarder.
//!
//! `prompt` holds what the caller sends us; `payload` holds what we
//! send to Gemini.

pub mod payload;
pub mod prompt;
