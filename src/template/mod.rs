//! Template resources: lookup, placeholder rendering and placement

pub mod render;
pub mod store;

pub use render::{normalize_full_name, render, TemplateBindings};
pub use store::{write_rendered, TemplateStore};

/// A template file and how it is placed in the generated workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateResource {
    /// File name in the template directory and in the output
    pub name: &'static str,

    /// Substitute placeholders before writing; otherwise copied verbatim
    pub rendered: bool,

    /// Also place the file under `projects/<libraryName>/`, since the
    /// library is published from its own project root
    pub copy_to_library_subpath: bool,
}

pub const LICENSE: TemplateResource = TemplateResource {
    name: "LICENSE",
    rendered: true,
    copy_to_library_subpath: false,
};

pub const README: TemplateResource = TemplateResource {
    name: "README.md",
    rendered: true,
    copy_to_library_subpath: true,
};

pub const PRETTIER_CONFIG: TemplateResource = TemplateResource {
    name: ".prettierrc",
    rendered: false,
    copy_to_library_subpath: true,
};

pub const CONTRIBUTING: TemplateResource = TemplateResource {
    name: "CONTRIBUTING.md",
    rendered: true,
    copy_to_library_subpath: true,
};
