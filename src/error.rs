use thiserror::Error;

#[cfg(doc)]
use crate::Optional;

/// Returned by checked access on an empty [`Optional`].
///
/// See [`Optional::value`] and [`Optional::value_mut`].
///
/// # Examples
///
/// ```
/// # use inplace_optional::{BadAccess, Optional};
/// let empty = Optional::<i32>::new();
/// assert_eq!(empty.value(), Err(BadAccess));
/// assert_eq!(BadAccess.to_string(), "bad optional access");
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[error("bad optional access")]
pub struct BadAccess;
