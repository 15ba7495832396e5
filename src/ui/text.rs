//! Count-to-text formatting shared by the renderer and host tests.

use core::fmt::Write;
use heapless::String;

/// Format the counter value as plain decimal: no leading zeros, no
/// grouping. `u16` never exceeds five digits, so the write cannot fail.
pub fn format_count(value: u16) -> String<5> {
    let mut s = String::new();
    let _ = write!(s, "{}", value);
    s
}
