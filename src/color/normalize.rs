//! Normalization of loaded literals into colors.
//!
//! A palette file may hold a single color or a collection of colors:
//!
//! - `(255, 0, 0)`, `[255, 0, 0, 128]` - channel sequences (3 or 4 ints)
//! - `'#ff0000'`, `'#f00'` - hex strings
//! - `'red'`, `'Dark Gray'` - color names
//! - a tuple or list whose items are any of the above

use super::{names, Color, ColorFormat};
use crate::literal::Literal;
use std::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Color Error
// ─────────────────────────────────────────────────────────────────────────────

/// Why a literal could not be read as colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorErrorKind {
    /// Channel sequence with a length other than 3 or 4
    ChannelCount(usize),
    /// Channel is an integer outside `0..=255`
    ChannelRange { channel: usize, value: i64 },
    /// Channel is not an integer
    ChannelType { channel: usize, kind: &'static str },
    /// String starting with `#` that is not a valid hex code
    MalformedHex(String),
    /// String that is neither hex nor a known color name
    UnknownName(String),
    /// Literal kind that cannot describe a color
    Unsupported(&'static str),
}

/// A normalization failure, with the index of the offending item when the
/// input was a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorError {
    pub item: Option<usize>,
    pub kind: ColorErrorKind,
}

impl ColorError {
    fn new(kind: ColorErrorKind) -> Self {
        Self { item: None, kind }
    }

    fn at(self, index: usize) -> Self {
        Self {
            item: Some(index),
            ..self
        }
    }
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(index) = self.item {
            write!(f, "item {}: ", index)?;
        }
        match &self.kind {
            ColorErrorKind::ChannelCount(count) => {
                write!(f, "expected 3 or 4 channels, found {}", count)
            }
            ColorErrorKind::ChannelRange { channel, value } => {
                write!(f, "channel {} value {} is outside 0..=255", channel, value)
            }
            ColorErrorKind::ChannelType { channel, kind } => {
                write!(f, "channel {} is a {}, expected an int", channel, kind)
            }
            ColorErrorKind::MalformedHex(text) => write!(f, "malformed hex color '{}'", text),
            ColorErrorKind::UnknownName(name) => write!(f, "unknown color name '{}'", name),
            ColorErrorKind::Unsupported(kind) => write!(f, "a {} cannot describe a color", kind),
        }
    }
}

impl std::error::Error for ColorError {}

// ─────────────────────────────────────────────────────────────────────────────
// Normalization
// ─────────────────────────────────────────────────────────────────────────────

/// Result of normalizing one literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    /// The literal was one color and the caller asked for it alone
    Single(Color),
    /// Zero or more colors, in literal order
    Many(Vec<Color>),
}

impl Normalized {
    pub fn into_vec(self) -> Vec<Color> {
        match self {
            Normalized::Single(color) => vec![color],
            Normalized::Many(colors) => colors,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Normalized::Single(_) => 1,
            Normalized::Many(colors) => colors.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Convert a loaded literal into colors in `format`.
///
/// With `alone_when_single` set, a literal holding exactly one color comes
/// back as [`Normalized::Single`]; otherwise the result is always
/// [`Normalized::Many`], even for a single color.
pub fn normalize(
    value: &Literal,
    format: ColorFormat,
    alone_when_single: bool,
) -> Result<Normalized, ColorError> {
    if is_single(value) {
        let color = format.apply(single_color(value)?);
        return Ok(if alone_when_single {
            Normalized::Single(color)
        } else {
            Normalized::Many(vec![color])
        });
    }

    let items = value
        .as_sequence()
        .ok_or_else(|| ColorError::new(ColorErrorKind::Unsupported(value.kind())))?;
    let colors = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            single_color(item)
                .map(|color| format.apply(color))
                .map_err(|e| e.at(i))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Normalized::Many(colors))
}

/// A string, or a non-empty sequence with at least one numeric item
/// (a channel list, possibly malformed).
fn is_single(value: &Literal) -> bool {
    match value {
        Literal::Str(_) => true,
        Literal::Tuple(items) | Literal::List(items) => items
            .iter()
            .any(|item| matches!(item, Literal::Int(_) | Literal::Float(_) | Literal::Bool(_))),
        _ => false,
    }
}

fn single_color(value: &Literal) -> Result<Color, ColorError> {
    match value {
        Literal::Str(text) if text.starts_with('#') => Color::from_hex(text)
            .ok_or_else(|| ColorError::new(ColorErrorKind::MalformedHex(text.clone()))),
        Literal::Str(text) => names::lookup(text)
            .ok_or_else(|| ColorError::new(ColorErrorKind::UnknownName(text.clone()))),
        Literal::Tuple(items) | Literal::List(items) => from_channels(items),
        other => Err(ColorError::new(ColorErrorKind::Unsupported(other.kind()))),
    }
}

fn from_channels(items: &[Literal]) -> Result<Color, ColorError> {
    if !matches!(items.len(), 3 | 4) {
        return Err(ColorError::new(ColorErrorKind::ChannelCount(items.len())));
    }
    let mut channels = [255u8; 4];
    for (channel, item) in items.iter().enumerate() {
        let Literal::Int(value) = item else {
            return Err(ColorError::new(ColorErrorKind::ChannelType {
                channel,
                kind: item.kind(),
            }));
        };
        channels[channel] = u8::try_from(*value).map_err(|_| {
            ColorError::new(ColorErrorKind::ChannelRange {
                channel,
                value: *value,
            })
        })?;
    }
    let [r, g, b, a] = channels;
    Ok(Color::rgba(r, g, b, a))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::parse;

    fn many(source: &str, format: ColorFormat) -> Result<Vec<Color>, ColorError> {
        normalize(&parse(source).unwrap(), format, false).map(Normalized::into_vec)
    }

    #[test]
    fn test_single_channel_tuple() {
        let colors = many("(255, 128, 0)", ColorFormat::RgbTuple).unwrap();
        assert_eq!(colors, vec![Color::rgb(255, 128, 0)]);
    }

    #[test]
    fn test_single_hex_and_name() {
        assert_eq!(
            many("'#00ff00'", ColorFormat::RgbTuple).unwrap(),
            vec![Color::rgb(0, 255, 0)]
        );
        assert_eq!(
            many("'Royal Blue'", ColorFormat::RgbTuple).unwrap(),
            vec![Color::rgb(65, 105, 225)]
        );
    }

    #[test]
    fn test_collection_of_mixed_forms() {
        let source = "((255, 0, 0), [0, 255, 0, 10], '#0000ff', 'white')";
        let colors = many(source, ColorFormat::RgbaTuple).unwrap();
        assert_eq!(
            colors,
            vec![
                Color::rgb(255, 0, 0),
                Color::rgba(0, 255, 0, 10),
                Color::rgb(0, 0, 255),
                Color::rgb(255, 255, 255),
            ]
        );
    }

    #[test]
    fn test_rgb_tuple_format_drops_alpha() {
        let colors = many("[(1, 2, 3, 4)]", ColorFormat::RgbTuple).unwrap();
        assert_eq!(colors, vec![Color::rgb(1, 2, 3)]);
    }

    #[test]
    fn test_empty_collection() {
        assert_eq!(many("()", ColorFormat::RgbTuple).unwrap(), vec![]);
        assert_eq!(many("[]", ColorFormat::RgbTuple).unwrap(), vec![]);
    }

    #[test]
    fn test_alone_when_single() {
        let value = parse("(1, 2, 3)").unwrap();
        assert_eq!(
            normalize(&value, ColorFormat::RgbTuple, true).unwrap(),
            Normalized::Single(Color::rgb(1, 2, 3))
        );
        assert_eq!(
            normalize(&value, ColorFormat::RgbTuple, false).unwrap(),
            Normalized::Many(vec![Color::rgb(1, 2, 3)])
        );

        let collection = parse("((1, 2, 3),)").unwrap();
        assert!(matches!(
            normalize(&collection, ColorFormat::RgbTuple, true).unwrap(),
            Normalized::Many(colors) if colors.len() == 1
        ));
    }

    #[test]
    fn test_channel_errors() {
        let err = many("(256, 0, 0)", ColorFormat::RgbTuple).unwrap_err();
        assert_eq!(
            err.kind,
            ColorErrorKind::ChannelRange {
                channel: 0,
                value: 256
            }
        );

        let err = many("(1, 2)", ColorFormat::RgbTuple).unwrap_err();
        assert_eq!(err.kind, ColorErrorKind::ChannelCount(2));

        let err = many("(1, 2.5, 3)", ColorFormat::RgbTuple).unwrap_err();
        assert_eq!(
            err.kind,
            ColorErrorKind::ChannelType {
                channel: 1,
                kind: "float"
            }
        );

        let err = many("(1, -1, 3)", ColorFormat::RgbTuple).unwrap_err();
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn test_sequence_with_any_number_is_one_color() {
        // One numeric item makes the whole sequence a channel list
        let err = many("((1, 2, 3), 4, 5)", ColorFormat::RgbTuple).unwrap_err();
        assert_eq!(err.item, None);
        assert_eq!(
            err.kind,
            ColorErrorKind::ChannelType {
                channel: 0,
                kind: "tuple"
            }
        );

        let err = many("((1, 2, 3), 4)", ColorFormat::RgbTuple).unwrap_err();
        assert_eq!(err.item, None);
        assert_eq!(err.kind, ColorErrorKind::ChannelCount(2));
    }

    #[test]
    fn test_item_index_is_reported() {
        let err = many("((1, 2, 3), 'nope', (4, 5, 6))", ColorFormat::RgbTuple).unwrap_err();
        assert_eq!(err.item, Some(1));
        assert_eq!(err.kind, ColorErrorKind::UnknownName("nope".to_string()));
        assert!(err.to_string().starts_with("item 1: "));
    }

    #[test]
    fn test_unsupported_kinds() {
        for source in ["None", "42", "True", "{'r': 1}", "((1, 2, 3), None)"] {
            let err = many(source, ColorFormat::RgbTuple).unwrap_err();
            assert!(
                matches!(err.kind, ColorErrorKind::Unsupported(_)),
                "{}",
                source
            );
        }
    }

    #[test]
    fn test_malformed_hex() {
        let err = many("'#12345'", ColorFormat::RgbTuple).unwrap_err();
        assert_eq!(err.kind, ColorErrorKind::MalformedHex("#12345".to_string()));
    }

    #[test]
    fn test_to_literal_output_normalizes_back() {
        let colors = vec![Color::rgb(9, 8, 7), Color::rgba(1, 2, 3, 4)];
        for format in [ColorFormat::RgbaTuple, ColorFormat::HexString] {
            let literal = Literal::Tuple(colors.iter().map(|c| c.to_literal(format)).collect());
            assert_eq!(
                normalize(&literal, format, false).unwrap().into_vec(),
                colors
            );
        }
    }
}
