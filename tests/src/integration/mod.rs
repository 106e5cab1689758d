//! Integration scenarios across the stores, the gate, and the workflow.

mod access_gate;
mod common;
mod http_flows;
mod submission;
