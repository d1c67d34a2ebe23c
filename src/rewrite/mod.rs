mod pass_through;
mod request;
mod response;

#[allow(unused_imports)]
pub use {pass_through::*, request::*, response::*};
