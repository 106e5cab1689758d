//! # Core Domain Entities
//!
//! Defines the pool and salary entry types shared across the workspace.
//!
//! ## Anonymity contract
//!
//! A `SalaryEntry` carries no submitter identity, timestamp, or other
//! client-correlatable field. Any field added here must be weighed against
//! re-identification risk before it ships.

use crate::errors::ValidationError;
use crate::token::AccessToken;
use serde::{Deserialize, Serialize};

/// Maximum pool name length in bytes (schema: varchar(140)).
pub const MAX_POOL_NAME_BYTES: usize = 140;

/// Maximum job title length in bytes (schema: varchar(100)).
pub const MAX_TITLE_BYTES: usize = 100;

/// Store-assigned pool identifier, used to link entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoolId(pub i32);

/// A named group gathering anonymous salary entries.
///
/// `public_token` names the pool in URLs; `reveal_token` is disclosed to a
/// client only after that client submits an entry. The two are always
/// distinct. Pool records are immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pool {
    pub id: PoolId,
    pub public_token: AccessToken,
    pub reveal_token: AccessToken,
    pub name: String,
    pub min_size: i16,
}

/// How often something occurs. Shared by the overtime and travel fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Never,
    Rarely,
    Sometimes,
    Often,
}

impl Frequency {
    /// Wire/storage form (lowercase name).
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Never => "never",
            Frequency::Rarely => "rarely",
            Frequency::Sometimes => "sometimes",
            Frequency::Often => "often",
        }
    }

    /// Parse the wire form. `field` names the originating form field for
    /// error reporting.
    pub fn parse(field: &'static str, value: &str) -> Result<Self, ValidationError> {
        match value {
            "never" => Ok(Frequency::Never),
            "rarely" => Ok(Frequency::Rarely),
            "sometimes" => Ok(Frequency::Sometimes),
            "often" => Ok(Frequency::Often),
            _ => Err(ValidationError::UnknownVariant { field }),
        }
    }

    /// All variants, in wire order.
    pub fn all() -> [Frequency; 4] {
        [
            Frequency::Never,
            Frequency::Rarely,
            Frequency::Sometimes,
            Frequency::Often,
        ]
    }
}

/// Degree of remote work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteLevel {
    No,
    Special,
    Partial,
    Yes,
}

impl RemoteLevel {
    /// Wire/storage form (lowercase name).
    pub fn as_str(&self) -> &'static str {
        match self {
            RemoteLevel::No => "no",
            RemoteLevel::Special => "special",
            RemoteLevel::Partial => "partial",
            RemoteLevel::Yes => "yes",
        }
    }

    /// Parse the wire form.
    pub fn parse(field: &'static str, value: &str) -> Result<Self, ValidationError> {
        match value {
            "no" => Ok(RemoteLevel::No),
            "special" => Ok(RemoteLevel::Special),
            "partial" => Ok(RemoteLevel::Partial),
            "yes" => Ok(RemoteLevel::Yes),
            _ => Err(ValidationError::UnknownVariant { field }),
        }
    }

    /// All variants, in wire order.
    pub fn all() -> [RemoteLevel; 4] {
        [
            RemoteLevel::No,
            RemoteLevel::Special,
            RemoteLevel::Partial,
            RemoteLevel::Yes,
        ]
    }
}

/// The pool-independent field bundle of one salary submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryFields {
    pub amount: i32,
    pub hours_per_week: i16,
    pub overtime: Frequency,
    pub overtime_paid: bool,
    pub remote: RemoteLevel,
    pub title: String,
    pub years_experience: i16,
    pub travel: Frequency,
}

impl SalaryFields {
    /// Check the bounds the storage schema enforces: non-negative numerics
    /// and a non-empty, bounded title. Enum fields are valid by type.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.amount < 0 {
            return Err(ValidationError::NegativeValue { field: "amount" });
        }
        if self.hours_per_week < 0 {
            return Err(ValidationError::NegativeValue { field: "hourswk" });
        }
        if self.years_experience < 0 {
            return Err(ValidationError::NegativeValue {
                field: "yearsexperience",
            });
        }
        if self.title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.title.len() > MAX_TITLE_BYTES {
            return Err(ValidationError::TitleTooLong {
                max: MAX_TITLE_BYTES,
            });
        }
        Ok(())
    }
}

/// One anonymous salary record, as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryEntry {
    pub pool_id: PoolId,
    #[serde(flatten)]
    pub fields: SalaryFields,
}

/// Check pool creation parameters against the schema bounds.
pub fn validate_pool_params(name: &str, min_size: i16) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyPoolName);
    }
    if name.len() > MAX_POOL_NAME_BYTES {
        return Err(ValidationError::PoolNameTooLong {
            max: MAX_POOL_NAME_BYTES,
        });
    }
    if min_size < 1 {
        return Err(ValidationError::MinSizeTooSmall);
    }
    Ok(())
}
