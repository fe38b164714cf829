/// Bounds a string to `max` bytes for display, appending an ellipsis when
/// anything was cut. The prefix of the original string is preserved so that
/// truncated provider messages stay recognizable.
pub fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    // Invariant: `end` must land on a char boundary.
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}
