//! Route-aware structured data for the document head.
//!
//! A navigation runs one pass over the head:
//!
//! | Stage | Module |
//! |-------|--------|
//! | pathname → [`PageEntity`] | [`route`] |
//! | canonical and `<meta>` tags | [`reconcile`] |
//! | JSON-LD graphs | [`schema`] |
//! | `<script>` replacement | [`inject`] |
//! | ordering, stamps, retraction | [`navigate`] |
//!
//! All head access goes through [`head::HeadTagStore`].

pub mod head;
pub mod inject;
pub mod navigate;
pub mod reconcile;
pub mod route;
pub mod schema;

pub use head::MemoryHead;
pub use navigate::Navigator;
pub use route::{PageEntity, RouteContext, resolve};
