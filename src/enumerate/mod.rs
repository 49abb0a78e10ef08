pub mod results;
pub mod runner;

use std::collections::BTreeMap;
use std::time::Duration;

use colored::*;
use indicatif::ProgressBar;
use tracing::warn;

pub use results::{AggregateResult, CommandResult, ServiceReport};
use runner::run_command;

/// Service kinds this tool knows how to enumerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Smb,
    Ldap,
    Ftp,
}

impl Service {
    /// Exact, case-sensitive match against the names accepted in the
    /// input document.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "smb" => Some(Service::Smb),
            "ldap" => Some(Service::Ldap),
            "ftp" => Some(Service::Ftp),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Service::Smb => "smb",
            Service::Ldap => "ldap",
            Service::Ftp => "ftp",
        }
    }

    /// Run the external tooling for this service against `ip` and capture
    /// whatever it prints. Nothing here interprets the output; the results
    /// file carries the raw captures for later review.
    pub fn enumerate(&self, ip: &str) -> ServiceReport {
        match self {
            Service::Smb => smb_enumeration(ip),
            Service::Ldap => ldap_enumeration(ip),
            Service::Ftp => ftp_enumeration(ip),
        }
    }
}

/// Anonymous share listing plus an anonymous RPC bind, one capture per tool.
fn smb_enumeration(ip: &str) -> ServiceReport {
    let mut tools = BTreeMap::new();
    tools.insert(
        "smbclient".to_string(),
        run_command("smbclient", &["-L", &format!("\\\\{}", ip), "-N"]),
    );
    tools.insert(
        "rpcclient".to_string(),
        run_command("rpcclient", &["-U", "", ip]),
    );
    ServiceReport::PerTool(tools)
}

/// Directory search probe against port 389.
fn ldap_enumeration(ip: &str) -> ServiceReport {
    ServiceReport::Single(run_command(
        "nmap",
        &["-p", "389", "--script", "ldap-search", ip],
    ))
}

/// Anonymous-login probe against port 21.
fn ftp_enumeration(ip: &str) -> ServiceReport {
    ServiceReport::Single(run_command(
        "nmap",
        &["-p", "21", "--script", "ftp-anon", ip],
    ))
}

/// Run the requested services in input order against one target.
///
/// Unknown names are reported and skipped without aborting the rest. A
/// repeated name re-runs its enumerator and the most recent report wins
/// under that key. Execution is strictly sequential; each enumerator
/// blocks until its external tools have exited.
pub fn enumerate_services(ip: &str, services: &[String]) -> AggregateResult {
    let mut results = AggregateResult::new();

    for name in services {
        match Service::from_name(name) {
            Some(service) => {
                println!(
                    "{} Enumerating {} on {}...",
                    "[+]".green().bold(),
                    service.name(),
                    ip
                );
                let spinner = ProgressBar::new_spinner()
                    .with_message(format!("{} on {}", service.name(), ip));
                spinner.enable_steady_tick(Duration::from_millis(100));

                let report = service.enumerate(ip);
                spinner.finish_and_clear();

                results.insert(name.clone(), report);
            }
            None => {
                warn!("unknown service requested: {}", name);
                println!("{} Unknown service: {}", "[-]".yellow().bold(), name);
            }
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_names_round_trip() {
        for name in ["smb", "ldap", "ftp"] {
            assert_eq!(Service::from_name(name).unwrap().name(), name);
        }
    }

    #[test]
    fn test_service_lookup_is_case_sensitive() {
        assert_eq!(Service::from_name("SMB"), None);
        assert_eq!(Service::from_name("Ftp"), None);
        assert_eq!(Service::from_name("telnet"), None);
    }
}
