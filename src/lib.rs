//! # UAB Research Computing Docs MCP Server
//!
//! A Model Context Protocol (MCP) server that lets an LLM search and read the
//! UAB Research Computing documentation (<https://docs.rc.uab.edu>), relaying
//! to GitHub code search and raw file retrieval on the repository that backs
//! the site.
//!
//! ## Features
//!
//! - Search the documentation repository through the GitHub code search API
//! - Fetch a page by site path, repository path or GitHub URL, falling back
//!   from the `main` to the `master` branch
//! - Static overviews: support channels, documentation sections, Cheaha quick start
//! - Every response is capped at a fixed character ceiling
//!
//! ## Modules
//!
//! - `server`: MCP server implementation and tools
//! - `github`: code search and raw page retrieval
//! - `document`: page reference normalization
//! - `format`: markdown rendering and truncation
//! - `config`: relay settings
//! - `error`: failure taxonomy

/// Relay settings
pub mod config;
/// Failure taxonomy shared by the tools
pub mod error;
/// Server implementation and MCP tools
pub mod server;
/// Page reference normalization
pub mod document;
/// GitHub code search and raw file retrieval
pub mod github;
/// Markdown rendering and truncation
pub mod format;
