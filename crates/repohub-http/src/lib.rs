//! HTTP plumbing between repohub services
//!
//! - **Trait-based client**: `HttpClientTrait`, mockable; responses come back
//!   with their status untouched so the gateway can relay them
//! - **Configurable**: timeouts and user agent via `HttpConfig`
//! - **Repo directory**: resolves repo ids through the Repo service for
//!   project and user expansion

pub mod client;
pub mod config;
pub mod directory;
pub mod error;

pub use client::{fetch_json, shared_client, HttpClient, HttpClientTrait};
pub use config::HttpConfig;
pub use directory::{expand_repos, HttpRepoDirectory, RepoDirectory};
pub use error::{HttpError, Result};

/// Re-export commonly used types
pub use reqwest::{header, Method, Response, StatusCode};
