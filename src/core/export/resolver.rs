//! Property resolution
//!
//! Turns a component's raw attributes into a complete [`PropertyMap`]: every
//! field in the fixed vocabulary is present, missing or empty values fall back
//! to `Undefined <Field>`.

use crate::domain::{Component, PropertyMap};

/// Resolve the full metadata map of a component
pub fn resolve(component: Component<'_>) -> PropertyMap {
    let info = component.info();
    PropertyMap::from_lookup(|field| info.raw_property(field))
}
