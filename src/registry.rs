//! Component registry: selector name → construction function.
//!
//! DESIGN
//! ======
//! Components are registered explicitly instead of being discovered. The
//! registry is generic over what a constructor produces, so the app stores
//! `fn() -> AnyView` while tests can store plain values.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("component `{0}` is already registered")]
    Duplicate(&'static str),
    #[error("no component registered as `{0}`")]
    Unknown(String),
}

/// Ordered mapping from component selector to its constructor.
pub struct ComponentRegistry<V> {
    entries: Vec<(&'static str, fn() -> V)>,
}

impl<V> Default for ComponentRegistry<V> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<V> std::fmt::Debug for ComponentRegistry<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl<V> ComponentRegistry<V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `ctor` under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] if `name` is already taken; the
    /// existing entry is left in place.
    pub fn register(&mut self, name: &'static str, ctor: fn() -> V) -> Result<(), RegistryError> {
        if self.contains(name) {
            return Err(RegistryError::Duplicate(name));
        }
        self.entries.push((name, ctor));
        Ok(())
    }

    /// Construct a fresh instance of the component registered as `name`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Unknown`] if nothing is registered as `name`.
    pub fn build(&self, name: &str) -> Result<V, RegistryError> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, ctor)| ctor())
            .ok_or_else(|| RegistryError::Unknown(name.to_owned()))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| *n == name)
    }

    /// Selectors in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(n, _)| *n)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
