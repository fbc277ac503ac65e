use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::error::InfobloxError;

/// Record types this client knows how to address under `record:<type>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordType {
    Cname,
    Txt,
    Host,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Cname => "cname",
            RecordType::Txt => "txt",
            RecordType::Host => "host",
        }
    }

    /// Field used to look records of this type up by name.
    pub fn search_field(&self) -> &'static str {
        match self {
            RecordType::Cname => "canonical",
            _ => "name",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = InfobloxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cname" => Ok(RecordType::Cname),
            "txt" => Ok(RecordType::Txt),
            "host" => Ok(RecordType::Host),
            _ => Err(InfobloxError::InvalidRecordType(s.to_string())),
        }
    }
}

/// Generic record body shared by CNAME, TXT and Host records.
/// Fields that do not apply to a record type are left unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "_ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configure_for_dns: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ipv4addrs: Vec<Ipv4AddrEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv4addr: Option<String>,
}

impl Record {
    pub fn host<I, S>(name: impl Into<String>, addrs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: Some(name.into()),
            ipv4addrs: addrs.into_iter().map(Ipv4AddrEntry::new).collect(),
            ..Default::default()
        }
    }

    pub fn cname(name: impl Into<String>, canonical: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            canonical: Some(canonical.into()),
            ..Default::default()
        }
    }

    pub fn txt(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_view(mut self, view: impl Into<String>) -> Self {
        self.view = Some(view.into());
        self
    }
}

/// IPv4 settings for a single address of a Host record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ipv4AddrEntry {
    #[serde(rename = "_ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configure_for_dhcp: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    pub ipv4addr: String,
}

impl Ipv4AddrEntry {
    pub fn new(ipv4addr: impl Into<String>) -> Self {
        Self {
            ipv4addr: ipv4addr.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordResult {
    pub result: Record,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordResults {
    pub result: Vec<Record>,
}
