use alloc::string::String;

/// Rejected configuration.
///
/// Only construction can fail. Runtime inputs (scroll offsets, viewport sizes, item counts)
/// are always clamped into a valid window instead.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("item extent must be greater than zero")]
    ZeroItemExtent,
    #[error("grid item width must be greater than zero")]
    ZeroItemWidth,
    #[error("grid item height must be greater than zero")]
    ZeroItemHeight,
    #[error("table row height must be greater than zero")]
    ZeroRowHeight,
    #[error("table column key must not be empty")]
    EmptyColumnKey,
    #[error("duplicate table column key `{0}`")]
    DuplicateColumnKey(String),
}
