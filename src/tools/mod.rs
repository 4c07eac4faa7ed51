//! Energy Formatter Tools module
//!
//! MCP tool implementations for the energy formatter.

pub mod energy;
pub mod status;
