//! `sinch://` resource addresses.
//!
//! Shape: `sinch://<family>/<kind>/<id>`. The id is percent-encoded when
//! rendered and decoded when parsed, so phone numbers keep their `+`.
//! Only `sms/batch` and `numbers/active` are addressable.

use std::fmt;

use super::error::ResourceError;

pub const SCHEME: &str = "sinch";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceFamily {
    Sms,
    Numbers,
}

impl ResourceFamily {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sms => "sms",
            Self::Numbers => "numbers",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Batch,
    Active,
}

impl ResourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Batch => "batch",
            Self::Active => "active",
        }
    }
}

/// A parsed resource address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceUri {
    pub family: ResourceFamily,
    pub kind: ResourceKind,
    pub id: String,
}

impl ResourceUri {
    pub fn new(family: ResourceFamily, kind: ResourceKind, id: impl Into<String>) -> Self {
        Self {
            family,
            kind,
            id: id.into(),
        }
    }

    pub fn sms_batch(batch_id: impl Into<String>) -> Self {
        Self::new(ResourceFamily::Sms, ResourceKind::Batch, batch_id)
    }

    pub fn active_number(phone_number: impl Into<String>) -> Self {
        Self::new(ResourceFamily::Numbers, ResourceKind::Active, phone_number)
    }

    /// Parse a `sinch://` address.
    ///
    /// Anything that is not a known family/kind pair with a non-empty id is
    /// reported as not found.
    pub fn parse(uri: &str) -> Result<Self, ResourceError> {
        let rest = uri
            .strip_prefix(SCHEME)
            .and_then(|r| r.strip_prefix("://"))
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let mut parts = rest.splitn(3, '/');
        let (family, kind, raw_id) = match (parts.next(), parts.next(), parts.next()) {
            (Some(family), Some(kind), Some(id)) if !id.is_empty() => (family, kind, id),
            _ => return Err(ResourceError::not_found(uri)),
        };

        let (family, kind) = match (family, kind) {
            ("sms", "batch") => (ResourceFamily::Sms, ResourceKind::Batch),
            ("numbers", "active") => (ResourceFamily::Numbers, ResourceKind::Active),
            _ => return Err(ResourceError::not_found(uri)),
        };

        let id = urlencoding::decode(raw_id)
            .map_err(|e| ResourceError::invalid_uri(format!("{}: {}", uri, e)))?
            .into_owned();

        Ok(Self { family, kind, id })
    }
}

impl fmt::Display for ResourceUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}://{}/{}/{}",
            SCHEME,
            self.family.as_str(),
            self.kind.as_str(),
            urlencoding::encode(&self.id)
        )
    }
}
