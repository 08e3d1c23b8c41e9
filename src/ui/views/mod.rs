pub mod factors;
pub mod footprint;
pub mod session;
pub mod suggestions;
