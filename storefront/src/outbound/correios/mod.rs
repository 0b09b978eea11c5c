//! Correios carrier adapter.

mod dto;
mod http_source;

pub use self::http_source::{CorreiosHttpIdentity, CorreiosHttpSource, PackageSpec};
