//! Physical-to-logical coordinate mapping.

/// Map a physical window index to a logical grid index.
///
/// `offset` is the viewport's logical offset on the axis, `physical` the
/// 0-based index into the render window, `buffer` the overscan depth, and
/// `total` the axis extent. The result is
/// `clamp(offset + physical - buffer, 0, total - 1)`, computed in signed
/// 64-bit so positions hanging past either grid edge resolve to the
/// boundary row/column instead of wrapping. With a nonzero buffer this
/// means several physical positions near the edges can map to the same
/// boundary coordinate.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn to_logical(offset: u32, physical: u32, buffer: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let raw = i64::from(offset) + i64::from(physical) - i64::from(buffer);
    // The clamp bounds the value into [0, u32::MAX]
    raw.clamp(0, i64::from(total) - 1) as u32
}
