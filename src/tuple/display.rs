// ============================================================================
// Display
// "x: 1 | y: 2 | z: 3" rendering and configurable formatting
// ============================================================================

use super::FixedTuple;
use crate::config::{FieldNaming, FormatConfig};
use crate::numeric::Scalar;
use std::fmt;

fn write_components<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    components: &[T],
    naming: FieldNaming,
    separator: &str,
    label_separator: &str,
) -> fmt::Result {
    let arity = components.len();
    for (index, value) in components.iter().enumerate() {
        if index > 0 {
            f.write_str(separator)?;
        }
        if let Some(label) = naming.label(arity, index) {
            f.write_str(&label)?;
            f.write_str(label_separator)?;
        }
        // Forward width/precision flags to each component
        fmt::Display::fmt(value, f)?;
    }
    Ok(())
}

impl<T: Scalar, const N: usize> fmt::Display for FixedTuple<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components(f, self.as_slice(), FieldNaming::Legacy, " | ", ": ")
    }
}

/// A tuple paired with a [`FormatConfig`], returned by [`FixedTuple::display_with`].
pub struct Formatted<'a, T, const N: usize> {
    tuple: &'a FixedTuple<T, N>,
    config: &'a FormatConfig,
}

impl<T: Scalar, const N: usize> fmt::Display for Formatted<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components(
            f,
            self.tuple.as_slice(),
            self.config.naming,
            &self.config.separator,
            &self.config.label_separator,
        )
    }
}

impl<T: Scalar, const N: usize> FixedTuple<T, N> {
    /// Render with custom naming and separators.
    ///
    /// ```
    /// use fixed_tuple::{FixedTuple, FormatConfig};
    ///
    /// let t = FixedTuple::new([1, 2, 3]);
    /// assert_eq!(t.display_with(&FormatConfig::compact()).to_string(), "1, 2, 3");
    /// ```
    pub fn display_with<'a>(&'a self, config: &'a FormatConfig) -> Formatted<'a, T, N> {
        Formatted {
            tuple: self,
            config,
        }
    }
}
