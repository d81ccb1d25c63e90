// Sentinel - outreach message composer for failed account automation
// Library exports

pub mod cli;
pub mod compose;
pub mod config;
pub mod logging;
pub mod macros;
