//! Bounded text buffers for the display fields.

use core::fmt::{self, Write};

/// Owned fixed-capacity text buffer for one display field.
///
/// Formatting past the capacity truncates silently instead of failing, and
/// every overwrite resets the buffer first, so a shorter value never keeps a
/// stale tail from a longer one.
#[derive(Clone, Copy)]
pub struct TextField<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> TextField<N> {
    /// Create an empty field.
    pub const fn new() -> Self {
        Self { buf: [0; N], len: 0 }
    }

    /// Reset the field and format `args` into it, truncating at capacity.
    pub fn format_into(&mut self, args: fmt::Arguments<'_>) {
        self.len = 0;
        // The writer truncates instead of erroring, so this cannot fail.
        let _ = self.write_fmt(args);
    }

    /// The written text.
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }

    /// Number of bytes currently written.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been written since the last reset.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Fixed capacity in bytes.
    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for TextField<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Write for TextField<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let space = N - self.len;
        let take = if s.len() <= space {
            s.len()
        } else {
            // Back off to a char boundary so the kept prefix stays valid UTF-8.
            let mut end = space;
            while end > 0 && !s.is_char_boundary(end) {
                end -= 1;
            }
            end
        };
        self.buf[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_field_is_empty() {
        let field: TextField<8> = TextField::new();
        assert_eq!(field.as_str(), "");
        assert!(field.is_empty());
        assert_eq!(field.capacity(), 8);
    }

    #[test]
    fn format_into_writes_text() {
        let mut field: TextField<8> = TextField::new();
        field.format_into(format_args!("{:02}:{:02}", 9, 5));
        assert_eq!(field.as_str(), "09:05");
        assert_eq!(field.len(), 5);
    }

    #[test]
    fn exact_capacity_fits() {
        let mut field: TextField<5> = TextField::new();
        field.format_into(format_args!("14:05"));
        assert_eq!(field.as_str(), "14:05");
    }

    #[test]
    fn overflow_truncates_silently() {
        let mut field: TextField<5> = TextField::new();
        field.format_into(format_args!("Mon 05 Jan"));
        assert_eq!(field.as_str(), "Mon 0");
        assert_eq!(field.len(), 5);
    }

    #[test]
    fn overwrite_clears_stale_tail() {
        let mut field: TextField<12> = TextField::new();
        field.format_into(format_args!("Charging"));
        assert_eq!(field.as_str(), "Charging");

        field.format_into(format_args!("{}%", 55));
        assert_eq!(field.as_str(), "55%");
        assert_eq!(field.len(), 3);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let mut field: TextField<4> = TextField::new();
        // "21°" is four bytes; the degree sign is two. Truncating one byte
        // further must drop the whole character, not split it.
        field.format_into(format_args!("21°C"));
        assert_eq!(field.as_str(), "21°");

        let mut narrow: TextField<3> = TextField::new();
        narrow.format_into(format_args!("21°C"));
        assert_eq!(narrow.as_str(), "21");
    }

    #[test]
    fn repeated_format_is_idempotent() {
        let mut once: TextField<8> = TextField::new();
        let mut twice: TextField<8> = TextField::new();
        once.format_into(format_args!("{}%", 100));
        twice.format_into(format_args!("{}%", 100));
        twice.format_into(format_args!("{}%", 100));
        assert_eq!(once.as_str(), "100%");
        assert_eq!(once.as_str(), twice.as_str());
    }
}
