mod builder;
mod client;
mod registry;

#[allow(unused_imports)]
pub use {builder::*, client::*, registry::*};
