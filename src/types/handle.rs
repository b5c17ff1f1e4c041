//! Object handles and the handle counter used while writing
//!
//! Handles are unique identifiers written as lowercase hexadecimal without a
//! `0x` prefix (group code 5 and the handle-reference ranges).

use std::fmt;

/// A unique identifier for a table entry, entity or object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Handle(u64);

impl Handle {
    /// The null handle (0)
    pub const NULL: Handle = Handle(0);

    /// Create a new handle from a raw value
    #[inline]
    pub const fn new(value: u64) -> Self {
        Handle(value)
    }

    /// Get the raw value
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Check if this is the null handle
    #[inline]
    pub const fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// Parse the hexadecimal wire form (case-insensitive, surrounding
    /// whitespace ignored)
    pub fn parse_hex(text: &str) -> Option<Self> {
        let text = text.trim();
        let text = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text);
        u64::from_str_radix(text, 16).ok().map(Handle)
    }

    /// Lowercase hexadecimal wire form
    pub fn to_hex(&self) -> String {
        format!("{:x}", self.0)
    }
}

impl From<u64> for Handle {
    fn from(value: u64) -> Self {
        Handle(value)
    }
}

impl From<Handle> for u64 {
    fn from(handle: Handle) -> Self {
        handle.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

impl fmt::LowerHex for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

/// Monotonic handle counter
///
/// Callers may reserve values for well-known objects before bulk emission
/// starts. Past `u64::MAX` the counter wraps to [`HandleSeed::BASE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleSeed {
    next: u64,
}

impl HandleSeed {
    /// First handle issued to ordinary entities and table entries
    pub const BASE: u64 = 0x30;

    /// Counter starting at [`HandleSeed::BASE`]
    pub const fn new() -> Self {
        HandleSeed { next: Self::BASE }
    }

    /// Counter starting at an explicit value
    pub const fn starting_at(value: u64) -> Self {
        HandleSeed { next: value }
    }

    /// The value the next call to [`HandleSeed::issue`] will return
    pub const fn peek(&self) -> Handle {
        Handle(self.next)
    }

    /// Issue the next handle
    pub fn issue(&mut self) -> Handle {
        let handle = Handle(self.next);
        self.next = self.next.checked_add(1).unwrap_or(Self::BASE);
        handle
    }

    /// Move the counter past `handle` if it has not got there yet
    pub fn skip_past(&mut self, handle: Handle) {
        if handle.0 >= self.next {
            self.next = handle.0.checked_add(1).unwrap_or(Self::BASE);
        }
    }
}

impl Default for HandleSeed {
    fn default() -> Self {
        HandleSeed::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_creation() {
        let handle = Handle::new(0x1234);
        assert_eq!(handle.value(), 0x1234);
        assert!(Handle::NULL.is_null());
    }

    #[test]
    fn test_handle_hex_forms() {
        let handle = Handle::new(0xABCD);
        assert_eq!(handle.to_string(), "abcd");
        assert_eq!(handle.to_hex(), "abcd");
        assert_eq!(format!("{:x}", handle), "abcd");
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(Handle::parse_hex("1F"), Some(Handle::new(0x1f)));
        assert_eq!(Handle::parse_hex(" 30 "), Some(Handle::new(0x30)));
        assert_eq!(Handle::parse_hex("0x2a"), Some(Handle::new(0x2a)));
        assert_eq!(Handle::parse_hex("zz"), None);
    }

    #[test]
    fn test_seed_is_monotonic() {
        let mut seed = HandleSeed::new();
        assert_eq!(seed.peek(), Handle::new(0x30));
        let a = seed.issue();
        let b = seed.issue();
        assert!(a < b);
        assert_eq!(seed.peek(), Handle::new(0x32));
    }

    #[test]
    fn test_seed_skip_past() {
        let mut seed = HandleSeed::new();
        seed.skip_past(Handle::new(0x10));
        assert_eq!(seed.peek(), Handle::new(0x30));
        seed.skip_past(Handle::new(0x40));
        assert_eq!(seed.issue(), Handle::new(0x41));
    }

    #[test]
    fn test_seed_wraps_at_the_top() {
        let mut seed = HandleSeed::new();
        seed.skip_past(Handle::new(u64::MAX));
        assert_eq!(seed.peek(), Handle::new(HandleSeed::BASE));

        let mut seed = HandleSeed::starting_at(u64::MAX);
        assert_eq!(seed.issue(), Handle::new(u64::MAX));
        assert_eq!(seed.issue(), Handle::new(HandleSeed::BASE));
    }
}
