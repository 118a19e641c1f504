//! Repository implementations.

pub mod kid;
pub mod user;

pub use kid::KidRepository;
pub use user::UserRepository;
