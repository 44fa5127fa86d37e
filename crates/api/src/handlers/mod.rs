pub mod expiry;
pub mod hello;
pub mod not_found;

pub use expiry::{get_ssl_expiry, get_whois_expiry};
pub use hello::hello;
pub use not_found::not_found;
