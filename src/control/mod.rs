mod builder;
mod error;
mod policy;
mod source;
mod unit;

#[allow(unused_imports)]
pub use {builder::*, error::*, policy::*, source::*, unit::*};
