pub mod get_expiry;

pub use get_expiry::{ExpiryOutcome, GetExpiryUseCase};
