//! # Models Module
//!
//! Data carried through a lookup: the upstream records and envelope, plus
//! the status and snapshot types the controller owns.

pub mod lookup_response;
pub mod postal_location;
pub mod query_status;

pub use lookup_response::{LookupResponse, SUCCESS_STATUS};
pub use postal_location::{BranchKind, PostalLocation};
pub use query_status::{LookupState, QueryStatus};
