pub mod whois_server_mock;

pub use whois_server_mock::MockWhoisServer;
