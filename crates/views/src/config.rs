//! Declarative view configuration consumed when a container is built.

use crate::predicate::Predicate;
use vista_core::Record;

/// One configured view: a name and its membership predicate.
#[derive(Clone, Debug)]
pub struct ViewDefinition {
    /// Unique, non-empty view name
    pub name: String,
    /// Membership predicate
    pub predicate: Predicate,
}

impl ViewDefinition {
    /// Creates a definition.
    pub fn new(name: impl Into<String>, predicate: Predicate) -> Self {
        Self {
            name: name.into(),
            predicate,
        }
    }

    /// Creates a definition from an infallible test.
    pub fn filter<F>(name: impl Into<String>, test: F) -> Self
    where
        F: Fn(&Record) -> bool + 'static,
    {
        Self::new(name, Predicate::new(test))
    }
}

/// Immutable snapshot of the initial view list.
///
/// `ViewsConfig::none()` (no configuration at all) and an empty list both
/// produce an empty registry.
#[derive(Clone, Debug, Default)]
pub struct ViewsConfig {
    views: Option<Vec<ViewDefinition>>,
}

impl ViewsConfig {
    /// Creates an empty view list.
    pub fn new() -> Self {
        Self {
            views: Some(Vec::new()),
        }
    }

    /// No view configuration.
    pub fn none() -> Self {
        Self { views: None }
    }

    /// Appends a view definition.
    pub fn with_view(mut self, name: impl Into<String>, predicate: Predicate) -> Self {
        self.views
            .get_or_insert_with(Vec::new)
            .push(ViewDefinition::new(name, predicate));
        self
    }

    /// Appends a view defined by an infallible test.
    pub fn with_filter<F>(mut self, name: impl Into<String>, test: F) -> Self
    where
        F: Fn(&Record) -> bool + 'static,
    {
        self.views
            .get_or_insert_with(Vec::new)
            .push(ViewDefinition::filter(name, test));
        self
    }

    /// Returns the definitions, in configured order.
    pub fn definitions(&self) -> &[ViewDefinition] {
        self.views.as_deref().unwrap_or(&[])
    }

    /// Returns true if a view list was supplied, even an empty one.
    #[inline]
    pub fn is_configured(&self) -> bool {
        self.views.is_some()
    }

    /// Returns true if there is nothing to define.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.definitions().is_empty()
    }
}

impl From<Vec<ViewDefinition>> for ViewsConfig {
    fn from(views: Vec<ViewDefinition>) -> Self {
        Self { views: Some(views) }
    }
}

impl From<Option<Vec<ViewDefinition>>> for ViewsConfig {
    fn from(views: Option<Vec<ViewDefinition>>) -> Self {
        Self { views }
    }
}
