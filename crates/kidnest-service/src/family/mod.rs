//! Family-code allocation and parent↔kid linkage.

pub mod code;
pub mod linkage;

pub use code::generate_code;
pub use linkage::FamilyLinkage;
