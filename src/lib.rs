//! Gantry - Fly.io deploy orchestrator for the avatar-crew backend.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── deploy        # Create-or-update deploy orchestration
//! │   ├── secrets       # Push secrets from a .env file
//! │   ├── check         # Local preflight diagnostics
//! │   ├── status        # Remote application overview
//! │   ├── completions   # Shell completions
//! │   └── output        # Console output helpers
//! └── core/             # Core library components
//!     ├── constants     # Fixed app name, region, URL format
//!     ├── envfile       # KEY=VALUE env-file parser
//!     └── flyctl        # Typed adapter over the flyctl CLI
//! ```
//!
//! # Features
//!
//! - Idempotent deploys: existing apps are redeployed, missing apps are
//!   launched first
//! - Secret propagation from dotenv-style files
//! - All platform work delegated to flyctl; gantry only sequences it

pub mod cli;
pub mod core;
pub mod error;
