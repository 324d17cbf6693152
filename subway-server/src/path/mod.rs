//! Path assembly: turns a rider's query into a priced route.

mod error;
mod service;

pub use error::PathError;
pub use service::{PathRequest, PathResponse, PathService};
