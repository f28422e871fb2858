pub mod authorize;
pub mod flavor;
pub mod stats;
pub mod step;
