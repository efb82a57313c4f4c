pub mod functions;
pub mod types;

pub use functions::classify;
pub use types::CheckOutcome;
