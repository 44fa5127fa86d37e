pub mod output;

pub use output::OutputResponse;
