//! Domain entities, validation, and authentication services.
//!
//! Purpose: define the strongly typed entities the relief application works
//! with, the rule-table validation engine guarding them, and the
//! [`AuthService`] orchestrating registration and login over the abstract
//! stores in [`ports`]. Types are immutable after creation; mutation happens
//! only through the owning workflow.

pub mod auth;
pub mod auth_service;
pub mod donation;
pub mod error;
pub mod incident;
pub mod ports;
pub mod session;
pub mod user;
pub mod validation;
pub mod volunteer;

pub use self::auth::{Credentials, CredentialsError};
pub use self::auth_service::{AuthService, LoginSuccess, Redirect};
pub use self::donation::{Donation, DonationId, DonationStatus, NewDonation};
pub use self::error::{LoginError, RegisterError, SessionError, Violation};
pub use self::incident::{Incident, IncidentId, NewIncident};
pub use self::session::{SessionContext, USER_ID_KEY};
pub use self::user::{RegistrationRequest, Role, User, UserId};
pub use self::volunteer::{Volunteer, VolunteerId};
