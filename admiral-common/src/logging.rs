//! Formatting helpers for tracing output.

use serde::Serialize;
use std::fmt::{self, Debug, Display};

/// Wrapper for pretty-printing descriptor fragments in logs as YAML.
///
/// ```ignore
/// use admiral_common::Pretty;
/// use tracing::trace;
///
/// trace!("resolved branding: {}", Pretty(&branding));
/// ```
///
/// Falls back to `Debug` if the value cannot be serialized.
pub struct Pretty<T>(pub T);

impl<T: Serialize + Debug> Pretty<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_yaml::to_string(&self.0) {
            Ok(yaml) => write!(f, "\n{}", yaml),
            Err(_) => write!(f, "\n{:#?}", self.0),
        }
    }
}

impl<T: Serialize + Debug> Display for Pretty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

impl<T: Serialize + Debug> Debug for Pretty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

/// Renders a list of registry keys as `[a, b, c]` for compact log fields.
pub struct Keys<'a, I>(pub &'a I);

impl<'a, I> Display for Keys<'a, I>
where
    &'a I: IntoIterator,
    <&'a I as IntoIterator>::Item: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, key) in self.0.into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", key)?;
        }
        f.write_str("]")
    }
}
