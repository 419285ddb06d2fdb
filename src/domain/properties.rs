//! Component metadata fields
//!
//! The metadata schema is closed: every component carries the same fixed set
//! of descriptive fields, in a fixed order. [`PropertyMap`] is the resolved,
//! total view over that schema used by path templates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

macro_rules! property_fields {
    ($( $variant:ident => $default:literal ),+ $(,)?) => {
        /// A named metadata field attached to every component
        ///
        /// Variants are declared in the canonical field order, which is also
        /// their `Ord` order.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum PropertyField {
            $( $variant, )+
        }

        impl PropertyField {
            /// All fields in canonical order
            pub const ALL: &'static [PropertyField] = &[ $( PropertyField::$variant, )+ ];

            /// Field name as written in path expressions (`{CostCenter}`)
            pub fn name(self) -> &'static str {
                match self {
                    $( PropertyField::$variant => stringify!($variant), )+
                }
            }

            /// Placeholder substituted when the field is absent or empty
            pub fn default_value(self) -> &'static str {
                match self {
                    $( PropertyField::$variant => $default, )+
                }
            }
        }

        impl FromStr for PropertyField {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( stringify!($variant) => Ok(PropertyField::$variant), )+
                    _ => Err(format!("Unknown metadata field: {s}")),
                }
            }
        }
    };
}

property_fields! {
    Comment => "Undefined Comment",
    CostCenter => "Undefined Cost Center",
    CreatedBy => "Undefined Creator",
    CreatedDate => "Undefined Creation Date",
    CreatingApplication => "Undefined Creating Application",
    Density => "Undefined Density",
    Description => "Undefined Description",
    DocumentNumber => "Undefined Document Number",
    EngineeringApprovalDate => "Undefined Engineering Approval Date",
    EngineeringApprovedBy => "Undefined Engineering Approver",
    EstimatedCost => "Undefined Estimated Cost",
    FileName => "Undefined File Name",
    Keywords => "Undefined Keywords",
    LastAuthor => "Undefined Last Author",
    LastUpdateDate => "Undefined Last Update Date",
    ManufacturingApprovedBy => "Undefined Manufacturing Approved By",
    ModifiedInformation => "Undefined Modified Information",
    Name => "Undefined Name",
    Number => "Undefined Part Number",
    Product => "Undefined Product",
    ReceivedFrom => "Undefined Received From",
    Revision => "Undefined Revision",
    StockSize => "Undefined Stock Size",
    Supplier => "Undefined Supplier",
    Title => "Undefined Title",
    Vendor => "Undefined Vendor",
    WebLink => "Undefined Web Link",
}

impl PropertyField {
    /// Whether the field appears in exported property tables (all but
    /// `FileName`)
    pub fn is_publishable(self) -> bool {
        self != PropertyField::FileName
    }
}

impl fmt::Display for PropertyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolved metadata for one component
///
/// Invariant: every [`PropertyField`] has a non-empty value. Built only by
/// the property resolver; never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyMap {
    values: BTreeMap<PropertyField, String>,
}

impl PropertyMap {
    /// Build a total map from a lookup, substituting placeholders for blanks
    pub fn from_lookup<'a, F>(mut lookup: F) -> Self
    where
        F: FnMut(PropertyField) -> Option<&'a str>,
    {
        let values = PropertyField::ALL
            .iter()
            .map(|&field| {
                let value = match lookup(field) {
                    Some(raw) if !raw.is_empty() => raw.to_string(),
                    _ => field.default_value().to_string(),
                };
                (field, value)
            })
            .collect();
        Self { values }
    }

    /// Value of a field; always present
    pub fn get(&self, field: PropertyField) -> &str {
        self.values
            .get(&field)
            .map(String::as_str)
            .unwrap_or_else(|| field.default_value())
    }

    /// Iterate fields in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (PropertyField, &str)> {
        self.values.iter().map(|(field, value)| (*field, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
