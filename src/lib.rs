//! Energy Formatter Library
//!
//! Localized joule/calorie formatting and the MCP tools built on it.

pub mod build_info;
pub mod config;
pub mod energy;
pub mod mcp;
pub mod tools;
