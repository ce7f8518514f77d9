//! Field tag annotations.
//!
//! A tag is `name[>sub>...][,option...]`. The name may be empty (fall back to
//! the declared field name) or the `-` sentinel (the field is never decoded).
//! Recognised options are `attr` and `omitempty`; others are ignored.

const IGNORE_SENTINEL: &str = "-";
const OPT_ATTR: &str = "attr";
const OPT_OMITEMPTY: &str = "omitempty";

/// Parsed form of a field tag annotation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldTag {
    /// Path segments of the tag name, split on `>`. Empty when the tag gives
    /// no usable name (absent, empty, or the ignore sentinel).
    pub path: Vec<String>,
    pub attr: bool,
    pub omitempty: bool,
    /// The first name segment is the ignore sentinel. Options still apply.
    pub ignore: bool,
}

impl FieldTag {
    pub fn parse(raw: &str) -> Self {
        let mut parts = raw.split(',');
        let name = parts.next().unwrap_or_default();

        let mut tag = FieldTag::default();
        let path: Vec<String> = name.split('>').map(ToString::to_string).collect();
        if path[0] == IGNORE_SENTINEL {
            tag.ignore = true;
        } else if !name.is_empty() {
            tag.path = path;
        }
        for opt in parts {
            match opt.trim() {
                OPT_ATTR => tag.attr = true,
                OPT_OMITEMPTY => tag.omitempty = true,
                _ => {}
            }
        }
        tag
    }

    /// First path segment: the only one matched at a single reconciliation level.
    pub fn name(&self) -> Option<&str> {
        self.path
            .first()
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_name() {
        let tag = FieldTag::parse("e1");
        assert_eq!(tag.name(), Some("e1"));
        assert!(!tag.attr && !tag.omitempty && !tag.ignore);
    }

    #[test]
    fn options_without_name() {
        let tag = FieldTag::parse(",attr,omitempty");
        assert_eq!(tag.name(), None);
        assert!(tag.attr);
        assert!(tag.omitempty);
    }

    #[test]
    fn ignore_sentinel_has_no_name() {
        let tag = FieldTag::parse("-");
        assert!(tag.ignore);
        assert_eq!(tag.name(), None);
    }

    #[test]
    fn ignore_sentinel_keeps_options() {
        let tag = FieldTag::parse("-,attr");
        assert!(tag.ignore);
        assert!(tag.attr);
        assert_eq!(tag.name(), None);
    }

    #[test]
    fn subelement_path_keeps_all_segments() {
        let tag = FieldTag::parse("Why>Maybe,omitempty");
        assert_eq!(tag.path, vec!["Why", "Maybe"]);
        assert_eq!(tag.name(), Some("Why"));
        assert!(tag.omitempty);
    }
}
