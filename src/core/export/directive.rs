//! Export directives
//!
//! One directive is one rule of the configuration: a target format, the path
//! template that places each file, an optional directory to clear first, and
//! which component roles it applies to.

use super::resolver;
use crate::domain::{Component, ComponentKind, ExportFormat, PathTemplate};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub struct ExportDirective {
    format: ExportFormat,
    template: PathTemplate,
    purge_scope: Option<PathBuf>,
    include_root: bool,
    include_subassemblies: bool,
    include_parts: bool,
}

impl ExportDirective {
    /// A directive that applies to every role and purges nothing
    pub fn new(format: ExportFormat, template: PathTemplate) -> Self {
        Self {
            format,
            template,
            purge_scope: None,
            include_root: true,
            include_subassemblies: true,
            include_parts: true,
        }
    }

    /// Directory, relative to the base export path, to clear before exporting
    pub fn with_purge_scope(mut self, scope: Option<PathBuf>) -> Self {
        self.purge_scope = scope;
        self
    }

    pub fn include_root(mut self, enabled: bool) -> Self {
        self.include_root = enabled;
        self
    }

    pub fn include_subassemblies(mut self, enabled: bool) -> Self {
        self.include_subassemblies = enabled;
        self
    }

    pub fn include_parts(mut self, enabled: bool) -> Self {
        self.include_parts = enabled;
        self
    }

    pub fn format(&self) -> ExportFormat {
        self.format
    }

    pub fn template(&self) -> &PathTemplate {
        &self.template
    }

    pub fn purge_scope(&self) -> Option<&Path> {
        self.purge_scope.as_deref()
    }

    /// Whether components playing `kind` are exported by this directive
    pub fn applies_to(&self, kind: ComponentKind) -> bool {
        match kind {
            ComponentKind::RootAssembly => self.include_root,
            ComponentKind::SubAssembly => self.include_subassemblies,
            ComponentKind::Part => self.include_parts,
        }
    }

    /// Output path of `component`, relative to the base export path
    pub fn get_export_path(&self, component: Component<'_>) -> PathBuf {
        self.template.render(&resolver::resolve(component))
    }

    /// Extensions deleted by the purge, empty when no purge is configured
    pub fn get_purge_extensions(&self) -> &'static [&'static str] {
        match self.purge_scope {
            Some(_) => self.format.extensions(),
            None => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ComponentId, ComponentInfo, Part, PropertyField};
    use std::path::MAIN_SEPARATOR;

    fn directive(format: ExportFormat, expression: &str) -> ExportDirective {
        ExportDirective::new(format, PathTemplate::parse(expression).unwrap())
    }

    #[test]
    fn test_get_export_path() {
        let part = Part::new(
            ComponentInfo::new(ComponentId::new("/vault/bolt.AD_PRT").unwrap(), "Bolt<1>")
                .with_property(PropertyField::Number, "HW-0042")
                .with_property(PropertyField::Revision, "B"),
        );
        let d = directive(ExportFormat::Step214, "{Number}_{Revision}/{Name}.stp");

        let expected = format!("HW-0042_B{MAIN_SEPARATOR}Bolt_1_.stp");
        assert_eq!(d.get_export_path(Component::Part(&part)), PathBuf::from(expected));
    }

    #[test]
    fn test_purge_extensions_follow_format() {
        let d = directive(ExportFormat::Iges, "{Name}.igs");
        assert!(d.get_purge_extensions().is_empty());

        let d = d.with_purge_scope(Some(PathBuf::from("iges")));
        assert_eq!(d.get_purge_extensions(), &[".iges", ".igs"]);
        assert_eq!(d.purge_scope(), Some(Path::new("iges")));
    }

    #[test]
    fn test_applies_to_roles() {
        let d = directive(ExportFormat::Sat, "{Name}.sat")
            .include_root(false)
            .include_parts(false);

        assert!(!d.applies_to(ComponentKind::RootAssembly));
        assert!(d.applies_to(ComponentKind::SubAssembly));
        assert!(!d.applies_to(ComponentKind::Part));
    }
}
