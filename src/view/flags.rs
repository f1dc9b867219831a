//! Compiler flag scanning.
//!
//! javac takes `-source` and `-target` as two-element flags: the marker
//! followed by its value. Joined forms such as `-source7` are not recognized.

/// Marker for the input language level.
pub const SOURCE_FLAG: &str = "-source";

/// Marker for the output bytecode level.
pub const TARGET_FLAG: &str = "-target";

/// Find the value paired with the first occurrence of `marker`.
///
/// Scans left to right. When an element equals `marker` and another element
/// follows it, that next element is returned, whatever it is. A marker in last
/// position has no value and the scan ends with `None`.
pub fn find_flag_value<'a, S: AsRef<str>>(flags: &'a [S], marker: &str) -> Option<&'a str> {
    let mut it = flags.iter();
    while let Some(flag) = it.next() {
        if flag.as_ref() == marker {
            if let Some(value) = it.next() {
                return Some(value.as_ref());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paired_value() {
        let flags = ["-g", "-source", "8", "-encoding", "UTF-8"];
        assert_eq!(find_flag_value(&flags, SOURCE_FLAG), Some("8"));
    }

    #[test]
    fn test_first_match_wins() {
        let flags = ["-source", "7", "-source", "11"];
        assert_eq!(find_flag_value(&flags, SOURCE_FLAG), Some("7"));
    }

    #[test]
    fn test_trailing_marker_has_no_value() {
        let flags = ["-g", "-source"];
        assert_eq!(find_flag_value(&flags, SOURCE_FLAG), None);
    }

    #[test]
    fn test_empty() {
        let flags: [&str; 0] = [];
        assert_eq!(find_flag_value(&flags, SOURCE_FLAG), None);
        assert_eq!(find_flag_value(&flags, TARGET_FLAG), None);
    }

    #[test]
    fn test_joined_form_not_recognized() {
        let flags = ["-source7", "-target8"];
        assert_eq!(find_flag_value(&flags, SOURCE_FLAG), None);
        assert_eq!(find_flag_value(&flags, TARGET_FLAG), None);
    }

    #[test]
    fn test_markers_scanned_independently() {
        let flags = ["-target", "8", "-source", "7"];
        assert_eq!(find_flag_value(&flags, TARGET_FLAG), Some("8"));
        assert_eq!(find_flag_value(&flags, SOURCE_FLAG), Some("7"));
    }

    #[test]
    fn test_following_element_taken_verbatim() {
        let flags = ["-source", "-source", "8"];
        assert_eq!(find_flag_value(&flags, SOURCE_FLAG), Some("-source"));
    }

    #[test]
    fn test_other_markers_are_not_paired() {
        // only the scanned marker consumes its neighbour
        let flags = ["-target", "-source", "9"];
        assert_eq!(find_flag_value(&flags, SOURCE_FLAG), Some("9"));
    }

    #[test]
    fn test_owned_strings() {
        let flags = vec!["-target".to_string(), "17".to_string()];
        assert_eq!(find_flag_value(&flags, TARGET_FLAG), Some("17"));
    }
}
