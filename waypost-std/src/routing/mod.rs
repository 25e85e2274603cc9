//! # Route Resolution
//!
//! - [`RouteTable`]: the ordered, validated collection of routes.
//! - [`BasePath`]: the prefix the application is mounted under.
//! - [`RouteParams`]: parameters captured from `{name}` / `{*rest}` segments.
//!
//! # Matching Rules
//!
//! | Input            | Result                                   |
//! |------------------|------------------------------------------|
//! | `/`              | redirect to the root alias (`Home`)      |
//! | a route pattern  | first route in declaration order         |
//! | anything else    | the fallback route                       |

pub mod base;
pub mod pattern;
pub mod table;

pub use base::BasePath;
pub use pattern::{RouteParams, has_params, normalize};
pub use table::{DEFAULT_ROOT, Resolution, ResolvedRoute, RouteTable, RouteTableBuilder};
