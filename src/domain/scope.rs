use std::fmt;

/// Resource hierarchy level a binding is anchored at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// A whole organization. Exactly one identifier per run.
    Organization,
    /// One or more folders.
    Folder,
    /// One or more projects.
    Project,
}

impl Scope {
    /// All scopes in menu order.
    pub const ALL: [Scope; 3] = [Scope::Organization, Scope::Folder, Scope::Project];

    /// Lowercase name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Organization => "organization",
            Scope::Folder => "folder",
            Scope::Project => "project",
        }
    }

    /// Capitalized name for plan output.
    pub fn display_name(&self) -> &'static str {
        match self {
            Scope::Organization => "Organization",
            Scope::Folder => "Folder",
            Scope::Project => "Project",
        }
    }

    /// Parse a scope from its command-line name.
    pub fn from_name(name: &str) -> Option<Scope> {
        match name.to_lowercase().as_str() {
            "organization" | "org" => Some(Scope::Organization),
            "folder" => Some(Scope::Folder),
            "project" => Some(Scope::Project),
            _ => None,
        }
    }

    /// The flag that carries identifiers for this scope.
    pub fn id_flag(&self) -> &'static str {
        match self {
            Scope::Organization => "--org-id",
            Scope::Folder => "--folder-ids",
            Scope::Project => "--project-ids",
        }
    }

    /// gcloud command family whose `add-iam-policy-binding` applies to this scope.
    pub fn binding_command(&self) -> &'static [&'static str] {
        match self {
            Scope::Organization => &["organizations"],
            Scope::Folder => &["resource-manager", "folders"],
            Scope::Project => &["projects"],
        }
    }

    pub fn accepts_multiple(&self) -> bool {
        !matches!(self, Scope::Organization)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
