//! In-memory representation of a loaded literal.

use std::fmt;

/// A value read from (or written to) a literal-data file.
///
/// Dict entries keep their insertion order so a saved file reads back the
/// way it was written.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Tuple(Vec<Literal>),
    List(Vec<Literal>),
    Dict(Vec<(Literal, Literal)>),
}

impl Literal {
    /// Human readable name of the literal kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Literal::None => "None",
            Literal::Bool(_) => "bool",
            Literal::Int(_) => "int",
            Literal::Float(_) => "float",
            Literal::Str(_) => "str",
            Literal::Tuple(_) => "tuple",
            Literal::List(_) => "list",
            Literal::Dict(_) => "dict",
        }
    }

    /// Items of a tuple or list, `None` for anything else.
    pub fn as_sequence(&self) -> Option<&[Literal]> {
        match self {
            Literal::Tuple(items) | Literal::List(items) => Some(items),
            _ => None,
        }
    }

    /// Whether this value or anything nested in it is a NaN or infinite float.
    pub fn has_non_finite(&self) -> bool {
        match self {
            Literal::Float(value) => !value.is_finite(),
            Literal::Tuple(items) | Literal::List(items) => items.iter().any(Literal::has_non_finite),
            Literal::Dict(entries) => entries
                .iter()
                .any(|(key, value)| key.has_non_finite() || value.has_non_finite()),
            _ => false,
        }
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Int(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::Str(value.to_string())
    }
}

/// Writes a string the way the loader reads it back: single quoted unless the
/// text contains single quotes and no double quotes.
fn write_str(f: &mut impl fmt::Write, text: &str) -> fmt::Result {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };
    f.write_char(quote)?;
    for ch in text.chars() {
        match ch {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => {
                f.write_char('\\')?;
                f.write_char(c)?;
            }
            c if (c as u32) < 0x20 || c as u32 == 0x7f => write!(f, "\\x{:02x}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char(quote)
}

fn write_float(f: &mut impl fmt::Write, value: f64) -> fmt::Result {
    // `{:?}` always keeps a decimal point or exponent, so the value reads back as a float
    write!(f, "{:?}", value)
}

/// Single-line form of the literal.
impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::None => f.write_str("None"),
            Literal::Bool(true) => f.write_str("True"),
            Literal::Bool(false) => f.write_str("False"),
            Literal::Int(value) => write!(f, "{}", value),
            Literal::Float(value) => write_float(f, *value),
            Literal::Str(text) => write_str(f, text),
            Literal::Tuple(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                if items.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
            Literal::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Literal::Dict(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_scalars() {
        assert_eq!(Literal::None.to_string(), "None");
        assert_eq!(Literal::Bool(true).to_string(), "True");
        assert_eq!(Literal::Int(-7).to_string(), "-7");
        assert_eq!(Literal::Float(1.0).to_string(), "1.0");
        assert_eq!(Literal::Float(0.25).to_string(), "0.25");
    }

    #[test]
    fn test_display_one_tuple_keeps_comma() {
        let value = Literal::Tuple(vec![Literal::Int(1)]);
        assert_eq!(value.to_string(), "(1,)");
        assert_eq!(Literal::Tuple(vec![]).to_string(), "()");
    }

    #[test]
    fn test_display_nested() {
        let value = Literal::List(vec![
            Literal::Tuple(vec![Literal::Int(255), Literal::Int(0), Literal::Int(0)]),
            Literal::Dict(vec![(Literal::from("name"), Literal::from("red"))]),
        ]);
        assert_eq!(value.to_string(), "[(255, 0, 0), {'name': 'red'}]");
    }

    #[test]
    fn test_display_string_quoting() {
        assert_eq!(Literal::from("it's").to_string(), "\"it's\"");
        assert_eq!(Literal::from("say \"hi\"").to_string(), "'say \"hi\"'");
        assert_eq!(Literal::from("both ' \"").to_string(), "'both \\' \"'");
        assert_eq!(Literal::from("tab\there").to_string(), "'tab\\there'");
    }

    #[test]
    fn test_has_non_finite() {
        assert!(!Literal::Float(1.5).has_non_finite());
        let nested = Literal::Tuple(vec![Literal::List(vec![Literal::Float(f64::NAN)])]);
        assert!(nested.has_non_finite());
    }
}
