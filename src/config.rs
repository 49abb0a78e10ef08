use std::fs;
use std::path::Path;

use serde_yaml::Value;

use crate::error::{EnumError, ValidationError};

/// Parsed and validated input document: the target address and the
/// services to enumerate against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub ip: String,
    pub services: Vec<String>,
}

impl ScanConfig {
    /// Load the input document from `path`, failing with a specific error
    /// for a missing file, an unreadable file, unparseable YAML, or a
    /// document that does not match the required shape.
    pub fn load(path: &Path) -> Result<ScanConfig, EnumError> {
        if !path.is_file() {
            return Err(EnumError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|source| EnumError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let doc: Value = serde_yaml::from_str(&content).map_err(|source| EnumError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::from_document(&doc)?)
    }

    /// Check the minimal required shape and pull out the typed fields.
    /// Keys beyond `ip` and `services` are tolerated and ignored.
    pub fn from_document(doc: &Value) -> Result<ScanConfig, ValidationError> {
        if !doc.is_mapping() {
            return Err(ValidationError::NotAMapping);
        }

        let ip = doc
            .get("ip")
            .ok_or(ValidationError::MissingIp)?
            .as_str()
            .ok_or(ValidationError::IpNotAString)?
            .to_string();

        let entries = doc
            .get("services")
            .ok_or(ValidationError::MissingServices)?
            .as_sequence()
            .ok_or(ValidationError::ServicesNotAList)?;

        let mut services = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let name = entry
                .as_str()
                .ok_or(ValidationError::ServiceNotAString { index })?;
            services.push(name.to_string());
        }

        Ok(ScanConfig { ip, services })
    }
}
