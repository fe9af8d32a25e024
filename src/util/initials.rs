//! Initials badge for participant rows.

#[cfg(test)]
#[path = "initials_test.rs"]
mod initials_test;

const SEPARATORS: [char; 3] = ['.', '_', '-'];

/// Up to two uppercase characters derived from the email's local-part.
///
/// `john.doe@x.com` gives `JD` (first letter of each of the first two
/// segments); `alice@x.com` gives `AL` (no separators, so the first two
/// letters); `bob.@x.com` gives `B`; `@x.com` gives an empty badge.
pub fn initials_badge(email: &str) -> String {
    let local = email.split('@').next().unwrap_or("");
    let segment_heads: String = local
        .split(SEPARATORS)
        .filter(|segment| !segment.is_empty())
        .take(2)
        .filter_map(|segment| segment.chars().next())
        .collect();

    let raw: String = if segment_heads.is_empty() || !local.contains(SEPARATORS) {
        local.chars().take(2).collect()
    } else {
        segment_heads
    };

    // Uppercasing can widen a character (ß -> SS); truncate afterwards.
    raw.to_uppercase().chars().take(2).collect()
}
