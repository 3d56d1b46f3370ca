//! Field paths into nested records

use std::fmt;
use std::str::FromStr;

use super::Record;
use super::Value;

/// One step of a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Named field of a record: `name`.
    Key(String),
    /// Position in a list: `[0]`.
    Index(usize),
}

impl Segment {
    fn from_bracket(inner: &str) -> Self {
        let inner = inner.trim_matches(|c| c == '"' || c == '\'');
        match inner.parse::<usize>() {
            Ok(index) => Segment::Index(index),
            Err(_) => Segment::Key(inner.to_string()),
        }
    }

    fn step<'a>(&self, value: &'a Value) -> Option<&'a Value> {
        match (value, self) {
            (Value::Record(record), segment) => segment.lookup(record),
            (Value::List(values), Segment::Index(index)) => values.get(*index),
            (Value::List(values), Segment::Key(key)) => {
                key.parse::<usize>().ok().and_then(|index| values.get(index))
            }
            _ => None,
        }
    }

    fn lookup<'a>(&self, record: &'a Record) -> Option<&'a Value> {
        match self {
            Segment::Key(key) => record.get(key),
            Segment::Index(index) => record.get(&index.to_string()),
        }
    }
}

/// A parsed path addressing a possibly nested field of a [`Record`].
///
/// Paths are split on `.`; bracketed indices address list elements, so
/// `"owner.tags[0]"` reads the first tag of the `owner` record.
///
/// # Example
///
/// ```
/// use tabular_lib::model::{FieldPath, Record, Value};
///
/// let record = Record::new().set("owner", Record::new().set("tags", vec!["a", "b"]));
/// let path = FieldPath::parse("owner.tags[1]");
///
/// assert_eq!(path.resolve(&record), Some(&Value::from("b")));
/// assert_eq!(FieldPath::parse("owner.name").resolve(&record), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    /// Parses a path expression.
    pub fn parse(path: &str) -> Self {
        let mut segments = Vec::new();

        for part in path.split('.') {
            let key_end = part.find('[').unwrap_or(part.len());
            if key_end > 0 || key_end == part.len() {
                segments.push(Segment::Key(part[..key_end].to_string()));
            }

            let mut rest = &part[key_end..];
            while let Some(bracketed) = rest.strip_prefix('[') {
                match bracketed.find(']') {
                    Some(close) => {
                        segments.push(Segment::from_bracket(&bracketed[..close]));
                        rest = &bracketed[close + 1..];
                    }
                    None => {
                        // Unterminated bracket, keep the remainder as a plain key
                        segments.push(Segment::Key(rest.to_string()));
                        rest = "";
                    }
                }
            }
            if !rest.is_empty() {
                segments.push(Segment::Key(rest.to_string()));
            }
        }

        Self { segments }
    }

    /// Returns the parsed segments.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Resolves this path against a record.
    ///
    /// Returns `None` when any segment is absent, when an intermediate value
    /// cannot be stepped into, or when the final value is null.
    pub fn resolve<'a>(&self, record: &'a Record) -> Option<&'a Value> {
        let (first, rest) = self.segments.split_first()?;
        let mut current = first.lookup(record)?;
        for segment in rest {
            current = segment.step(current)?;
        }
        (!current.is_null()).then_some(current)
    }
}

impl FromStr for FieldPath {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Key(key) if i == 0 => write!(f, "{}", key)?,
                Segment::Key(key) => write!(f, ".{}", key)?,
                Segment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(k: &str) -> Segment {
        Segment::Key(k.to_string())
    }

    #[test]
    fn test_parse_dotted() {
        assert_eq!(FieldPath::parse("name").segments(), &[key("name")]);
        assert_eq!(
            FieldPath::parse("a.b.c").segments(),
            &[key("a"), key("b"), key("c")]
        );
    }

    #[test]
    fn test_parse_brackets() {
        assert_eq!(
            FieldPath::parse("owner.tags[0]").segments(),
            &[key("owner"), key("tags"), Segment::Index(0)]
        );
        assert_eq!(
            FieldPath::parse("rows[2][\"label\"]").segments(),
            &[key("rows"), Segment::Index(2), key("label")]
        );
        assert_eq!(FieldPath::parse("[1]").segments(), &[Segment::Index(1)]);
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldPath::parse("owner.tags[0].name").to_string(), "owner.tags[0].name");
    }

    #[test]
    fn test_resolve_nested() {
        let record: Record = serde_json::from_value(serde_json::json!({
            "id": "1",
            "owner": {"name": "Ada", "tags": ["x", {"label": "y"}]}
        }))
        .unwrap();

        assert_eq!(FieldPath::parse("owner.name").resolve(&record), Some(&Value::from("Ada")));
        assert_eq!(FieldPath::parse("owner.tags[0]").resolve(&record), Some(&Value::from("x")));
        assert_eq!(FieldPath::parse("owner.tags.1.label").resolve(&record), Some(&Value::from("y")));
    }

    #[test]
    fn test_resolve_missing_segments() {
        let record = Record::new().set("owner", Value::Null).set("name", "frog");

        assert_eq!(FieldPath::parse("owner.name").resolve(&record), None);
        assert_eq!(FieldPath::parse("missing").resolve(&record), None);
        assert_eq!(FieldPath::parse("name.first").resolve(&record), None);
        assert_eq!(FieldPath::parse("owner").resolve(&record), None);
    }
}
