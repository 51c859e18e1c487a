//! Client library for the Semaphore CI v1 REST API.
//!
//! Every operation is a single authenticated HTTP GET followed by a JSON
//! decode into a typed record. [`SemaphoreApi`] holds the authentication
//! token and the HTTP transport; [`ProjectApi`] scopes requests to one
//! project identified by its hash id.
//!
//! ```no_run
//! use semaphore_client::{ClientConfig, SemaphoreApi};
//!
//! # async fn run() -> semaphore_client::Result<()> {
//! let api = SemaphoreApi::new(ClientConfig::new("auth-token"))?;
//! let project = api.project("3f1004b8343faabda63d441734526c854380ab89");
//! let status = project.branch_status("master").await?;
//! println!("{}: {}", status.branch.branch_name, status.branch.result);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod domain;
pub mod id;

pub use client::{ClientConfig, ClientError, ProjectApi, Result, SemaphoreApi};
pub use id::{BranchId, BuildNumber};
