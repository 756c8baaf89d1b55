//! Types shared across the auth workspace

mod secret;

pub use secret::Secret;
