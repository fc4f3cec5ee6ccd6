/// A project configuration that carries a schema version.
///
/// Survey relevance predicates only ever see configs through this trait.
pub trait VersionedConfig {
    /// The schema `apiVersion`, e.g. `skaffold/v2beta21`.
    fn version(&self) -> &str;
}

impl<T: VersionedConfig + ?Sized> VersionedConfig for &T {
    fn version(&self) -> &str {
        (**self).version()
    }
}
