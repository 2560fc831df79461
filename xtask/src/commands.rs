//! Command families exposed by `cargo xtask`.

pub mod images;
pub mod metadata;
