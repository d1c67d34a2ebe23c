// https://stackoverflow.com/a/61417700
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

mod layer;
mod service;

/// Client.
pub mod client;

/// Cache control configuration.
pub mod control;

/// Cache-control headers.
pub mod headers;

/// Request and response rewriters.
pub mod rewrite;

pub use {layer::*, service::*};
