//! # Services Layer
//!
//! Services abstract external resources. The only one here is the postal
//! directory.

pub mod pincode;

pub use pincode::{HttpPincodeDirectory, LookupError, PincodeDirectory};
