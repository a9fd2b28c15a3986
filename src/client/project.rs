//! Project resolution for provider configuration calls.
//!
//! Every resource path is scoped to a project. The client asks a
//! [`ProjectResolver`] for the active project on each call; a resolver that
//! has none makes the call fail with `project id not available`.

/// Supplies the project identifier that scopes every request.
pub trait ProjectResolver: Send + Sync {
    /// The active project identifier, if one is configured.
    fn project_id(&self) -> Option<&str>;
}

/// Resolver returning a fixed project identifier.
///
/// # Example Usage
///
/// ```rust
/// use saml_provider_config::client::{ProjectResolver, StaticProjectResolver};
///
/// let resolver = StaticProjectResolver::new("mock-project-id");
/// assert_eq!(resolver.project_id(), Some("mock-project-id"));
///
/// let unresolved = StaticProjectResolver::unresolved();
/// assert_eq!(unresolved.project_id(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticProjectResolver {
    project_id: Option<String>,
}

impl StaticProjectResolver {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
        }
    }

    /// A resolver with no project configured.
    pub fn unresolved() -> Self {
        Self { project_id: None }
    }
}

impl ProjectResolver for StaticProjectResolver {
    fn project_id(&self) -> Option<&str> {
        // An empty id is treated the same as a missing one.
        self.project_id.as_deref().filter(|id| !id.is_empty())
    }
}
