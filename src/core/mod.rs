//! Core library components.
//!
//! This module contains the reusable logic for env-file parsing and the
//! typed adapter over the external flyctl CLI.

pub mod constants;
pub mod envfile;
pub mod flyctl;
