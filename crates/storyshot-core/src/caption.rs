//! Caption convention: first line = title, remainder = body
//!
//! A shared card stores one caption string. The composer joins the title
//! and body inputs with a newline; the gallery splits them back apart.

/// A caption split into its title/body parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caption {
    pub title: Option<String>,
    pub body: String,
}

/// Join title and body into one caption string.
///
/// Returns `None` when both segments are blank (the row stores a null
/// caption). A title with an empty body keeps its trailing newline so the
/// title survives a later [`parse`].
pub fn compose(title: &str, body: &str) -> Option<String> {
    let title = title.trim();
    let body = body.trim();
    match (title.is_empty(), body.is_empty()) {
        (true, true) => None,
        (true, false) => Some(body.to_string()),
        (false, _) => Some(format!("{title}\n{body}")),
    }
}

/// Split a caption at the first newline.
///
/// No newline means the whole string is body with no title.
pub fn parse(caption: Option<&str>) -> Caption {
    let Some(caption) = caption else {
        return Caption {
            title: None,
            body: String::new(),
        };
    };
    if caption.trim().is_empty() {
        return Caption {
            title: None,
            body: String::new(),
        };
    }
    match caption.find('\n') {
        None => Caption {
            title: None,
            body: caption.trim().to_string(),
        },
        Some(idx) => {
            let title = caption[..idx].trim();
            Caption {
                title: if title.is_empty() {
                    None
                } else {
                    Some(title.to_string())
                },
                body: caption[idx + 1..].trim().to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let caption = compose("Morning walk", "Cold air, warm coffee.").unwrap();
        let parsed = parse(Some(&caption));
        assert_eq!(parsed.title.as_deref(), Some("Morning walk"));
        assert_eq!(parsed.body, "Cold air, warm coffee.");
    }

    #[test]
    fn test_round_trip_with_empty_body() {
        let caption = compose("Just a title", "").unwrap();
        assert_eq!(caption, "Just a title\n");
        let parsed = parse(Some(&caption));
        assert_eq!(parsed.title.as_deref(), Some("Just a title"));
        assert_eq!(parsed.body, "");
    }

    #[test]
    fn test_no_newline_is_all_body() {
        let parsed = parse(Some("  one line, no title  "));
        assert_eq!(parsed.title, None);
        assert_eq!(parsed.body, "one line, no title");
    }

    #[test]
    fn test_blank_and_missing_captions() {
        assert_eq!(
            parse(None),
            Caption {
                title: None,
                body: String::new()
            }
        );
        assert_eq!(
            parse(Some("   \n  ")),
            Caption {
                title: None,
                body: String::new()
            }
        );
        assert_eq!(compose("  ", "  "), None);
    }

    #[test]
    fn test_multi_line_body_keeps_inner_newlines() {
        let parsed = parse(Some("Title\nline one\nline two"));
        assert_eq!(parsed.title.as_deref(), Some("Title"));
        assert_eq!(parsed.body, "line one\nline two");
    }

    #[test]
    fn test_leading_newline_means_no_title() {
        let parsed = parse(Some("\nbody only"));
        assert_eq!(parsed.title, None);
        assert_eq!(parsed.body, "body only");
    }
}
