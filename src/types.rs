use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

//==============================================================================
// Address
//==============================================================================

/// A postal address as collected in the field
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street_number: String,
    pub street_name: String,
    pub postal_code: String,
    pub city: String,
}

impl Address {
    pub fn new(
        street_number: impl Into<String>,
        street_name: impl Into<String>,
        postal_code: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            street_number: street_number.into(),
            street_name: street_name.into(),
            postal_code: postal_code.into(),
            city: city.into(),
        }
    }
}

//==============================================================================
// Status
//==============================================================================

/// Outcome of one surveyed address.
///
/// The data source owns the exact vocabulary, so unknown tags are kept verbatim
/// in `Other` rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    Pending,
    Valid,
    Invalid,
    Unreachable,
    Other(String),
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Status::Pending => "PENDING",
            Status::Valid => "VALID",
            Status::Invalid => "INVALID",
            Status::Unreachable => "UNREACHABLE",
            Status::Other(tag) => tag,
        }
    }
}

impl From<String> for Status {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "PENDING" => Status::Pending,
            "VALID" => Status::Valid,
            "INVALID" => Status::Invalid,
            "UNREACHABLE" => Status::Unreachable,
            _ => Status::Other(tag),
        }
    }
}

impl From<&str> for Status {
    fn from(tag: &str) -> Self {
        Status::from(tag.to_string())
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        match status {
            Status::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//==============================================================================
// Survey / Campaign
//==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressStatus {
    pub address: Address,
    pub status: Status,
}

impl AddressStatus {
    pub fn new(address: Address, status: impl Into<Status>) -> Self {
        Self {
            address,
            status: status.into(),
        }
    }
}

/// Parent record of a campaign: the client and its reference address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    pub id: String,
    pub client: String,
    pub client_address: Address,
    /// Any other survey fields; carried through untouched, never rendered
    #[serde(flatten)]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl Survey {
    pub fn new(id: impl Into<String>, client: impl Into<String>, client_address: Address) -> Self {
        Self {
            id: id.into(),
            client: client.into(),
            client_address,
            metadata: BTreeMap::new(),
        }
    }
}

/// A set of address-level outcomes tied to one survey
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    pub survey_id: String,
    #[serde(default)]
    pub address_statuses: Vec<AddressStatus>,
}

impl Campaign {
    pub fn new(id: impl Into<String>, survey_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            survey_id: survey_id.into(),
            address_statuses: Vec::new(),
        }
    }

    pub fn with_status(mut self, address: Address, status: impl Into<Status>) -> Self {
        self.address_statuses.push(AddressStatus::new(address, status));
        self
    }
}
