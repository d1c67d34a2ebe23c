mod directives;
mod headers;

#[allow(unused_imports)]
pub use {directives::*, headers::*};
