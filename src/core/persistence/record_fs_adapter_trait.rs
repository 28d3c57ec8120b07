use anyhow::Result;

/// Filesystem adapter contract for a keyed record collection.
///
/// One document per key; `list` returns every readable document.
pub trait RecordFsAdapterTrait<T> {
    fn read(&self, key: &str) -> Result<Option<T>>;

    fn insert(&self, key: &str, data: &T) -> Result<()>;

    fn update(&self, key: &str, data: &T) -> Result<()>;

    fn delete(&self, key: &str) -> Result<()>;

    fn list(&self) -> Result<Vec<T>>;
}
