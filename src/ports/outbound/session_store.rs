use crate::shared::Result;

/// SessionStore port for the persisted "is authenticated" flag
///
/// This is the whole authentication mechanism: a flag that survives between
/// runs. Nothing is verified against an identity provider.
pub trait SessionStore {
    /// Reads the persisted flag; a store that was never written reads as `false`
    fn read_flag(&self) -> Result<bool>;

    /// Persists the flag as set
    fn write_flag(&self) -> Result<()>;

    /// Removes the flag
    fn clear_flag(&self) -> Result<()>;
}
