pub mod flavor;
pub mod session;
pub mod stats;
pub mod step;
