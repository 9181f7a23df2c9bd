//! Resource donations pledged by the public.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable server-assigned donation identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DonationId(Uuid);

impl DonationId {
    /// Generate a new random [`DonationId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for DonationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Processing state of a pledged donation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DonationStatus {
    /// Pledged but not yet collected; the default for new donations.
    #[default]
    Pending,
    /// Picked up and en route to a distribution point.
    Collected,
    /// Handed over to relief recipients.
    Distributed,
}

impl fmt::Display for DonationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => f.write_str("Pending"),
            Self::Collected => f.write_str("Collected"),
            Self::Distributed => f.write_str("Distributed"),
        }
    }
}

/// Donation fields supplied by the donor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDonation {
    /// Name of the donor.
    pub donor_name: String,
    /// Donor contact address.
    pub email: String,
    /// Kind of resource pledged, e.g. `"Food"`.
    pub resource_type: String,
    /// Number of units pledged; must be at least 1.
    pub quantity: i32,
    /// Optional free-text description of the goods.
    pub description: Option<String>,
    /// Optional donor phone number.
    pub contact_number: Option<String>,
    /// Optional address for collection.
    pub pickup_address: Option<String>,
}

/// A pledged donation.
///
/// ## Invariants
/// - `status` starts as [`DonationStatus::Pending`].
/// - `donation_date` and `created_at` are stamped when the pledge is
///   recorded and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    /// Server-assigned identifier.
    pub id: DonationId,
    /// Name of the donor.
    pub donor_name: String,
    /// Donor contact address.
    pub email: String,
    /// Kind of resource pledged.
    pub resource_type: String,
    /// Number of units pledged.
    pub quantity: i32,
    /// Optional free-text description of the goods.
    pub description: Option<String>,
    /// Optional donor phone number.
    pub contact_number: Option<String>,
    /// Optional address for collection.
    pub pickup_address: Option<String>,
    /// Current processing state.
    pub status: DonationStatus,
    /// When the pledge was made.
    pub donation_date: DateTime<Utc>,
    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Donation {
    /// Record a pledge, assigning an id and applying the creation defaults.
    ///
    /// Callers validate the draft through
    /// [`validation::validate_donation`](crate::domain::validation::validate_donation)
    /// before recording it.
    pub fn pledge(draft: NewDonation) -> Self {
        let now = Utc::now();
        Self {
            id: DonationId::random(),
            donor_name: draft.donor_name,
            email: draft.email,
            resource_type: draft.resource_type,
            quantity: draft.quantity,
            description: draft.description,
            contact_number: draft.contact_number,
            pickup_address: draft.pickup_address,
            status: DonationStatus::default(),
            donation_date: now,
            created_at: now,
        }
    }
}
