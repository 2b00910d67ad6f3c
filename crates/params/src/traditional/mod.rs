//! Constants for the elliptic-curve algorithms

pub mod curves;
pub mod limits;
