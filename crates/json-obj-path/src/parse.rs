//! Path text parsing.

use crate::types::{Path, Step};
use crate::PathError;

/// Check if a string is a non-empty run of ASCII digits.
///
/// # Example
///
/// ```
/// use json_obj_path::is_index;
///
/// assert!(is_index("0"));
/// assert!(is_index("007"));
/// assert!(!is_index("-1"));
/// assert!(!is_index("+1"));
/// assert!(!is_index("x"));
/// assert!(!is_index(""));
/// ```
pub fn is_index(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a single dot-free segment into a [`Step`].
///
/// The last `[` and the last `]` delimit the index. The `]` has to close the
/// segment and the field portion may not hold another `[`.
pub fn parse_segment(segment: &str) -> Result<Step<'_>, PathError> {
    if segment.is_empty() {
        return Err(PathError::InvalidPath);
    }
    let Some(open) = segment.rfind('[') else {
        return Ok(Step::Field(segment));
    };
    let close = segment.rfind(']').ok_or(PathError::InvalidPath)?;
    if close <= open || close != segment.len() - 1 {
        return Err(PathError::InvalidPath);
    }
    let digits = &segment[open + 1..close];
    if !is_index(digits) {
        return Err(PathError::InvalidPath);
    }
    let index: usize = digits.parse().map_err(|_| PathError::InvalidPath)?;
    let field = &segment[..open];
    if field.is_empty() {
        return Ok(Step::Index(index));
    }
    if field.contains('[') {
        return Err(PathError::InvalidPath);
    }
    Ok(Step::FieldIndex(field, index))
}

/// Parse a path such as `planets[1].moons` into steps.
///
/// # Errors
///
/// Returns [`PathError::InvalidPath`] for an empty path, an empty segment
/// (leading, trailing or doubled dot), or a malformed bracket clause.
///
/// # Example
///
/// ```
/// use json_obj_path::{parse_path, Step};
///
/// let path = parse_path("planets[1].moons").unwrap();
/// assert_eq!(path, vec![Step::FieldIndex("planets", 1), Step::Field("moons")]);
///
/// assert!(parse_path("a..b").is_err());
/// assert!(parse_path("a[-1]").is_err());
/// ```
pub fn parse_path(text: &str) -> Result<Path<'_>, PathError> {
    text.split('.').map(parse_segment).collect()
}

/// Format steps back into path text.
pub fn format_path(path: &[Step<'_>]) -> String {
    let mut out = String::new();
    for (i, step) in path.iter().enumerate() {
        if i > 0 {
            out.push('.');
        }
        out.push_str(&step.to_string());
    }
    out
}
