//! # tavily-recon-client
//!
//! HTTP dispatch and the operation facade for tavily-recon.
//!
//! [`TavilyClient`] exposes the nine reconnaissance operations. Each one
//! checks the credential, normalizes its arguments, performs a single
//! authenticated POST through a [`Transport`] and renders the response as a
//! plain-text report.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tavily_recon_client::TavilyClient;
//! use tavily_recon_core::{QueryParams, TavilyConfig};
//!
//! # async fn run() -> tavily_recon_core::Result<()> {
//! let client = TavilyClient::new(TavilyConfig::from_env())?;
//! let report = client.research(&QueryParams::new("rust async runtimes")).await?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod client;
pub mod transport;

pub use client::TavilyClient;
pub use transport::{HttpTransport, Transport};
