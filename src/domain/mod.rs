//! Domain models and types for Neutralizer.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Component tree** ([`Assembly`], [`Part`], and the tagged view [`Component`])
//! - **Identity** ([`ComponentId`], the canonical file identity used for deduplication)
//! - **Metadata schema** ([`PropertyField`], [`PropertyMap`])
//! - **Export formats** ([`ExportFormat`])
//! - **Path templates** ([`PathTemplate`])
//! - **Error types** ([`NeutralizerError`], [`TemplateError`]) and the [`Result`] alias
//!
//! # Example
//!
//! ```rust
//! use neutralizer::domain::{Assembly, ComponentId, ComponentInfo, Part, PropertyField};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let bolt = Part::new(
//!     ComponentInfo::new(ComponentId::new("/vault/bolt.AD_PRT")?, "Bolt<1>")
//!         .with_property(PropertyField::Number, "HW-0042"),
//! );
//! let root = Assembly::new(ComponentInfo::new(ComponentId::new("/vault/frame.AD_ASM")?, "Frame"))
//!     .with_part(bolt);
//! assert_eq!(root.parts.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod component;
pub mod errors;
pub mod format;
pub mod ids;
pub mod properties;
pub mod result;
pub mod template;

pub use component::{
    Assembly, Component, ComponentInfo, ComponentKind, DesignParameter, Part,
};
pub use errors::{NeutralizerError, TemplateError};
pub use format::ExportFormat;
pub use ids::ComponentId;
pub use properties::{PropertyField, PropertyMap};
pub use result::Result;
pub use template::PathTemplate;
