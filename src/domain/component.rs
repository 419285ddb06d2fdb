//! Assembly hierarchy
//!
//! The tree is read-only input. An [`Assembly`] owns its parts and
//! sub-assemblies; a file referenced from several places appears as several
//! nodes sharing one [`ComponentId`].
//!
//! Traversal code works on [`Component`], a borrowed tagged view that says
//! which role a node plays (root, sub-assembly, part).

use super::ids::ComponentId;
use super::properties::PropertyField;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A named, possibly formula-driven design parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignParameter {
    pub name: String,

    /// Formula as typed by the designer (may be empty)
    #[serde(default)]
    pub equation: String,

    /// Computed value
    pub value: f64,

    #[serde(default)]
    pub units: String,

    /// Parameter type as reported by the host (Distance, Angle, Count...)
    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default)]
    pub comment: String,
}

/// Data common to every component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentInfo {
    /// Canonical file identity
    pub file: ComponentId,

    /// Display name, may carry an instance suffix such as `<2>`
    pub name: String,

    /// Raw metadata as read from the host; absent means undefined
    #[serde(default)]
    pub properties: BTreeMap<PropertyField, String>,

    #[serde(default)]
    pub parameters: Vec<DesignParameter>,
}

impl ComponentInfo {
    pub fn new(file: ComponentId, name: impl Into<String>) -> Self {
        Self {
            file,
            name: name.into(),
            properties: BTreeMap::new(),
            parameters: Vec::new(),
        }
    }

    /// Raw attribute lookup
    ///
    /// `Name` and `FileName` come from the node itself rather than the
    /// property table.
    pub fn raw_property(&self, field: PropertyField) -> Option<&str> {
        match field {
            PropertyField::Name => Some(self.name.as_str()),
            PropertyField::FileName => Some(self.file.as_str()),
            other => self.properties.get(&other).map(String::as_str),
        }
    }

    pub fn with_property(mut self, field: PropertyField, value: impl Into<String>) -> Self {
        self.properties.insert(field, value.into());
        self
    }

    pub fn with_parameter(mut self, parameter: DesignParameter) -> Self {
        self.parameters.push(parameter);
        self
    }
}

/// A leaf component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(flatten)]
    pub info: ComponentInfo,
}

impl Part {
    pub fn new(info: ComponentInfo) -> Self {
        Self { info }
    }
}

/// A component containing parts and further assemblies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assembly {
    #[serde(flatten)]
    pub info: ComponentInfo,

    #[serde(default)]
    pub parts: Vec<Part>,

    #[serde(default)]
    pub subassemblies: Vec<Assembly>,
}

impl Assembly {
    pub fn new(info: ComponentInfo) -> Self {
        Self {
            info,
            parts: Vec::new(),
            subassemblies: Vec::new(),
        }
    }

    pub fn with_part(mut self, part: Part) -> Self {
        self.parts.push(part);
        self
    }

    pub fn with_subassembly(mut self, assembly: Assembly) -> Self {
        self.subassemblies.push(assembly);
        self
    }

    /// Number of containment edges below this node (shared nodes counted
    /// once per edge)
    pub fn edge_count(&self) -> usize {
        self.parts.len()
            + self
                .subassemblies
                .iter()
                .map(|sub| 1 + sub.edge_count())
                .sum::<usize>()
    }
}

/// Role of a component within the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    RootAssembly,
    SubAssembly,
    Part,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ComponentKind::RootAssembly => "Root Assembly",
            ComponentKind::SubAssembly => "Subassembly",
            ComponentKind::Part => "Part",
        };
        f.write_str(label)
    }
}

/// Borrowed view of a node tagged with its role
#[derive(Debug, Clone, Copy)]
pub enum Component<'a> {
    RootAssembly(&'a Assembly),
    SubAssembly(&'a Assembly),
    Part(&'a Part),
}

impl<'a> Component<'a> {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::RootAssembly(_) => ComponentKind::RootAssembly,
            Component::SubAssembly(_) => ComponentKind::SubAssembly,
            Component::Part(_) => ComponentKind::Part,
        }
    }

    pub fn info(&self) -> &'a ComponentInfo {
        match self {
            Component::RootAssembly(assembly) | Component::SubAssembly(assembly) => {
                &assembly.info
            }
            Component::Part(part) => &part.info,
        }
    }

    pub fn id(&self) -> &'a ComponentId {
        &self.info().file
    }

    pub fn name(&self) -> &'a str {
        &self.info().name
    }
}
