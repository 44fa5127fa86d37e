pub mod expiry;

// Re-export use cases
pub use expiry::{ExpiryOutcome, GetExpiryUseCase};
