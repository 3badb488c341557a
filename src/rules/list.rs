use std::{borrow::Cow, fmt};

// <https://github.github.com/gfm/#list-items> mentions that:
//
//     An ordered list marker is a sequence of 1–9 arabic digits (0-9), followed by either a .
//     character or a ) character. (The reason for the length limit is that with 10 digits we
//     start seeing integer overflows in some browsers.)
//
// Only the `.` form is recognized here.
const MAX_ORDERED_DIGITS: usize = 9;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ListMarker<'a> {
    Ordered { number: &'a str },
    Unordered(UnorderedListMarker),
}

impl fmt::Display for ListMarker<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ordered { number } => write!(f, "{number}."),
            Self::Unordered(marker) => write!(f, "{}", char::from(marker)),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub(crate) enum UnorderedListMarker {
    Asterisk,
    Plus,
    Hyphen,
}

impl From<&UnorderedListMarker> for char {
    fn from(value: &UnorderedListMarker) -> Self {
        match value {
            UnorderedListMarker::Asterisk => '*',
            UnorderedListMarker::Plus => '+',
            UnorderedListMarker::Hyphen => '-',
        }
    }
}

impl TryFrom<char> for UnorderedListMarker {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '*' => Ok(UnorderedListMarker::Asterisk),
            '+' => Ok(UnorderedListMarker::Plus),
            '-' => Ok(UnorderedListMarker::Hyphen),
            other => Err(other),
        }
    }
}

/// A line that starts a list item, split into its parts.
///
/// ```markdown
///   1.   item text
/// ^^ indent
///   ^^ marker
///     ^^^ gap
///        ^^^^^^^^^ content
/// ```
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ListItem<'a> {
    pub(crate) indent: &'a str,
    pub(crate) marker: ListMarker<'a>,
    pub(crate) gap: &'a str,
    pub(crate) content: &'a str,
}

impl<'a> ListItem<'a> {
    pub(crate) fn parse(line: &'a str) -> Option<Self> {
        if is_thematic_break(line) {
            return None;
        }
        let rest = line.trim_start_matches([' ', '\t']);
        let indent = &line[..line.len() - rest.len()];

        let (marker, after_marker) = match rest.chars().next()? {
            c @ ('*' | '+' | '-') => {
                let marker = UnorderedListMarker::try_from(c).ok()?;
                (ListMarker::Unordered(marker), &rest[c.len_utf8()..])
            }
            _ => {
                let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
                if digits == 0 || digits > MAX_ORDERED_DIGITS {
                    return None;
                }
                let after_marker = rest[digits..].strip_prefix('.')?;
                let number = &rest[..digits];
                (ListMarker::Ordered { number }, after_marker)
            }
        };

        let content = after_marker.trim_start_matches([' ', '\t']);
        let gap = &after_marker[..after_marker.len() - content.len()];
        // `**bold**` and `1.5` start with marker characters but aren't list items.
        if gap.is_empty() && !content.is_empty() {
            return None;
        }

        Some(Self {
            indent,
            marker,
            gap,
            content,
        })
    }
}

/// `* * *`, `---`, `_ _ _`: three or more of the same marker and nothing else
/// but spaces.
fn is_thematic_break(line: &str) -> bool {
    let mut markers = line.chars().filter(|c| !matches!(c, ' ' | '\t'));
    let Some(marker @ ('*' | '-' | '_')) = markers.next() else {
        return false;
    };
    let mut count = 1;
    for c in markers {
        if c != marker {
            return false;
        }
        count += 1;
    }
    count >= 3
}

pub(crate) fn is_list_item(line: &str) -> bool {
    ListItem::parse(line).is_some()
}

/// `-   item` -> `- item`
pub(crate) fn collapse_marker_spacing(line: &str) -> Cow<'_, str> {
    match ListItem::parse(line) {
        Some(item) if item.gap.chars().count() >= 2 && !item.content.is_empty() => {
            tracing::trace!(?item, "collapsing list marker spacing");
            format!("{}{} {}", item.indent, item.marker, item.content).into()
        }
        _ => line.into(),
    }
}
