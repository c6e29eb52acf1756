//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Declares a UUID-backed identifier newtype.
///
/// Every generated type gets `new()` (random v4), `from_uuid`, `as_uuid`,
/// `Default`, `Display` and `FromStr`, and serializes as a bare UUID string.
macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wraps an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

uuid_id!(
    /// Organizational scope every record belongs to.
    TenantId
);
uuid_id!(
    /// Identifier of the person a record was created for.
    UserId
);
uuid_id!(ScreeningId);
uuid_id!(AppointmentId);
uuid_id!(ReminderId);
uuid_id!(ApplianceId);
uuid_id!(WarrantyId);
uuid_id!(ManualId);
uuid_id!(ServiceRecordId);
uuid_id!(BillId);
uuid_id!(PaymentId);
uuid_id!(TaxYearId);
uuid_id!(DeductionId);

impl TenantId {
    /// Tenant assigned to accounts that were never placed in an organization.
    pub const DEFAULT: TenantId = TenantId(Uuid::from_u128(0x3e80_2e65_916e_4f2c_8068_abdd_3b93_dc2c));
}

impl UserId {
    /// Parses a user id from a token subject claim.
    pub fn parse_subject(subject: &str) -> Result<Self, ValidationError> {
        let trimmed = subject.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("sub"));
        }
        trimmed
            .parse()
            .map_err(|_| ValidationError::invalid_format("sub", "expected a UUID"))
    }
}
