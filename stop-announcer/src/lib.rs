//! Train stopping-pattern announcer.
//!
//! Turns an ordered list of stations, each either a stop or passed
//! through, into a single announcement such as "This train runs express
//! from Central to Buranda, stopping only at South Bank".

pub mod announcer;
pub mod domain;
pub mod stations;
