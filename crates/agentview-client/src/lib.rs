//! Typed HTTP client SDK for the AgentView API.
//!
//! AgentView tracks conversations between end users and AI agents:
//! users own sessions, sessions hold runs, and runs hold items. This crate
//! provides an admin client authenticated by API key and a public client
//! authenticated by a user token, each in async and blocking form.
//!
//! # Example
//!
//! ```no_run
//! use agentview_client::{AgentView, RunCreate, SessionCreate, SessionsQuery, Status, Result};
//! use serde_json::json;
//!
//! # async fn example() -> Result<()> {
//! let client = AgentView::builder()
//!     .base_url("http://localhost:1990")
//!     .api_key("av_secret")
//!     .build()?;
//!
//! let session = client.sessions().create(SessionCreate::new("support")).await?;
//! let run = client
//!     .runs()
//!     .create(
//!         RunCreate::new(&session.id, vec![json!({ "role": "user", "content": "Hi" })], "1.0.0")
//!             .with_status(Status::InProgress),
//!     )
//!     .await?;
//! println!("Started run {}", run.id);
//!
//! let page = client
//!     .sessions()
//!     .list(SessionsQuery::fields().agent("support").starred(true))
//!     .await?;
//! println!("{} starred sessions", page.pagination.total_count);
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - **Users**: create, get (self, id, token, external id), update
//! - **Sessions**: create, get, list, update, star/unstar
//! - **Runs**: create, update
//! - **Config**: get, update
//! - **Public**: own profile and sessions, by user token only

pub mod api;
#[cfg(feature = "blocking")]
pub mod blocking;
pub mod client;
pub mod config;
pub mod datetime;
pub mod error;
pub mod fields;
pub mod patch;
pub mod public;
mod request;
mod transport;
pub mod types;

pub use client::{AgentView, ClientBuilder};
pub use config::ClientConfig;
pub use datetime::{format_timestamp, parse_timestamp};
pub use error::{Error, Result};
pub use fields::{FieldValue, Fields};
pub use patch::Patch;
pub use public::PublicAgentView;
pub use request::USER_TOKEN_HEADER;
pub use types::*;
