//! Cross-module integration flows.

pub mod live_flows;
pub mod stub_flows;
pub mod view_consistency;
