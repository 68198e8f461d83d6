//! Client for the OmniBioAI object registry.
//!
//! The registry exposes a small read-only HTTP API authenticated with a
//! bearer token:
//! - `GET /api/dev/objects/` lists objects.
//! - `GET /api/dev/objects/{id}/` fetches one object.
//!
//! Response bodies are returned as [`serde_json::Value`] without any
//! interpretation of their shape.
//!
//! # Example (env-configured)
//!
//! ```no_run
//! use omnibioai_sdk::OmniClient;
//!
//! # async fn run() -> omnibioai_sdk::Result<()> {
//! // Reads OMNIBIOAI_BASE_URL / OMNIBIOAI_TOKEN, falling back to
//! // http://127.0.0.1:8001 and `dev`.
//! let client = OmniClient::from_env()?;
//! let listing = client.objects_list().await?;
//! println!("{} objects", listing["count"]);
//!
//! let object = client.object_get("56d3fc3a-709b-4ed0-bf17-8cb73c6746b0").await?;
//! println!("{}", object["object_type"]);
//! # Ok(()) }
//! ```

mod client;
mod config;
mod error;

pub use client::*;
pub use config::*;
pub use error::{Error, Result};
