pub mod appliance;
pub mod lenient;
pub mod report;

pub use appliance::*;
pub use report::*;
