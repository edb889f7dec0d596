//! Scope-isolation for CSS authored inline in server-rendered templates.
//!
//! Given a block of raw CSS text, every class selector is rewritten to a
//! namespaced variant derived from the content fingerprint of the block,
//! so that styles from different templates and partials cannot collide.
//! The caller receives the rewritten CSS, a map from original class names
//! to their namespaced forms, and the fingerprint itself.
//!
//! ## Example
//! ```
//! use scoped_css::RenderContext;
//!
//! // One context per render; `true` means production behavior
//! let mut ctx = RenderContext::new(true);
//!
//! let scoped = ctx.scope_css(".header { font-weight: bold; }");
//!
//! assert_eq!(
//!     scoped.css.as_str(),
//!     format!(".{}-header {{ font-weight: bold; }}", scoped.prefix)
//! );
//! assert_eq!(scoped.classes["header"], format!("{}-header", scoped.prefix));
//!
//! // The same block again emits no duplicate CSS, only the mapping
//! let again = ctx.scope_css(".header { font-weight: bold; }");
//! assert!(again.css.is_empty());
//! assert_eq!(again.classes, scoped.classes);
//! ```

#[macro_use]
extern crate lazy_static;

mod attributes;
mod context;
mod css;

pub use attributes::serialize_attributes;
pub use context::{RenderContext, ScopedCss};
pub use css::{fingerprint, rewrite_classes};
pub use scoped_css_core::*;
