//! Tool handlers for the contact-profiler MCP server

pub mod analyze_contact;
pub mod detailed_help;
