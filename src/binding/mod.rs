//! Declarative binding of translation keys to page elements.
//!
//! Markers on elements are parsed ([`markers`]) into an explicit
//! [`BindingRegistry`] ([`registry`]); a render pass ([`binder`]) resolves
//! every binding in one language and writes the result back, then updates
//! the language selector ([`selector`]) and the state-dependent labels
//! ([`dynamic`]).

pub mod binder;
pub mod dynamic;
pub mod markers;
pub mod registry;
pub mod selector;

pub use binder::{ApplyReport, ContentMode, apply_bindings, render_binding, update_dynamic_message};
pub use dynamic::{DynamicLabel, refresh_dynamic_labels};
pub use markers::MarkerError;
pub use registry::{Binding, BindingRegistry, RenderMode};
pub use selector::update_language_ui;
