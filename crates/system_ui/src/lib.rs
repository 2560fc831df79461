//! Shared UI primitive library for the catalog site.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the
//! stable `data-ui-*` DOM contract consumed by the site stylesheet. Views should
//! compose these primitives instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Button, ButtonSize, ButtonVariant, Cluster, EmptyState, Grid, Heading, IconButton, LayoutAlign,
    LayoutGap, LayoutJustify, LayoutPadding, Modal, Pill, SearchField, Stack, Text, TextRole,
    TextTone,
};
