pub mod pretty_json;

pub use pretty_json::PrettyJson;
