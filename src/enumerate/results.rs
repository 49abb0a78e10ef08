use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Captured output of a single external command invocation. Built once by
/// the runner and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// What one service enumerator produced. The nmap-backed probes yield a
/// single capture; SMB fans out to several tools and reports each capture
/// under the tool's name. Untagged so the YAML document keeps the plain
/// shape of either a capture or a tool-name mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServiceReport {
    Single(CommandResult),
    PerTool(BTreeMap<String, CommandResult>),
}

/// Everything collected for one target, keyed by requested service name.
/// A `BTreeMap` keeps the on-disk key order deterministic.
pub type AggregateResult = BTreeMap<String, ServiceReport>;
