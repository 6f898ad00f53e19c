//! Parser for literal-data documents.
//!
//! Reads a single Python-style literal: `None`, booleans, numbers, strings,
//! tuples, lists and dicts. Anything that would need evaluation (names,
//! operators, calls) is rejected.

use super::value::Literal;
use std::fmt;

/// Nesting limit for containers.
const MAX_DEPTH: usize = 256;

/// A syntax error with its 1-based position in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl ParseError {
    pub fn new(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            column,
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}, column {}: {}",
            self.line, self.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

/// Parse a complete document into one literal.
pub fn parse(source: &str) -> Result<Literal, ParseError> {
    let mut parser = Parser::new(source);
    parser.skip_trivia();
    if parser.peek().is_none() {
        return Err(parser.error("empty document"));
    }
    let value = parser.value(0)?;
    parser.skip_trivia();
    match parser.peek() {
        None => Ok(value),
        Some(ch) => Err(parser.error(format!("unexpected trailing character '{}'", ch))),
    }
}

struct Parser<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(self.line, self.column, message)
    }

    /// Skip whitespace and `#` comments.
    fn skip_trivia(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.bump();
            } else if ch == '#' {
                while let Some(c) = self.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.bump();
                }
            } else {
                break;
            }
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), ParseError> {
        self.skip_trivia();
        match self.peek() {
            Some(ch) if ch == expected => {
                self.bump();
                Ok(())
            }
            Some(ch) => Err(self.error(format!("expected '{}', found '{}'", expected, ch))),
            None => Err(self.error(format!("expected '{}', found end of input", expected))),
        }
    }

    fn value(&mut self, depth: usize) -> Result<Literal, ParseError> {
        if depth > MAX_DEPTH {
            return Err(self.error("nesting too deep"));
        }
        self.skip_trivia();
        match self.peek() {
            None => Err(self.error("unexpected end of input")),
            Some('(') => self.tuple(depth),
            Some('[') => self.list(depth),
            Some('{') => self.dict(depth),
            Some('\'') | Some('"') => self.strings(),
            Some(ch) if ch.is_ascii_digit() || ch == '-' || ch == '+' || ch == '.' => self.number(),
            Some(ch) if ch.is_alphabetic() || ch == '_' => self.keyword(),
            Some(ch) => Err(self.error(format!("unexpected character '{}'", ch))),
        }
    }

    fn keyword(&mut self) -> Result<Literal, ParseError> {
        let (line, column) = (self.line, self.column);
        let mut word = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() || ch == '_' {
                word.push(ch);
                self.bump();
            } else {
                break;
            }
        }
        match word.as_str() {
            "None" => Ok(Literal::None),
            "True" => Ok(Literal::Bool(true)),
            "False" => Ok(Literal::Bool(false)),
            _ => Err(ParseError::new(
                line,
                column,
                format!("'{}' is not a literal", word),
            )),
        }
    }

    fn number(&mut self) -> Result<Literal, ParseError> {
        let (line, column) = (self.line, self.column);
        let mut negative = false;
        if let Some(sign @ ('-' | '+')) = self.peek() {
            negative = sign == '-';
            self.bump();
            self.skip_trivia();
        }

        let mut text = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '.' || ch == '_' {
                text.push(ch);
                self.bump();
                // exponent sign
                if (ch == 'e' || ch == 'E') && !is_radix_prefixed(&text) {
                    if let Some(sign @ ('-' | '+')) = self.peek() {
                        text.push(sign);
                        self.bump();
                    }
                }
            } else {
                break;
            }
        }

        let invalid = || ParseError::new(line, column, format!("invalid number '{}'", text));
        if text.is_empty() || !underscores_valid(&text) {
            return Err(invalid());
        }
        let digits = text.replace('_', "");

        if let Some((radix, body)) = radix_split(&digits) {
            let magnitude = u64::from_str_radix(body, radix).map_err(|_| invalid())?;
            return signed_int(magnitude, negative).ok_or_else(invalid).map(Literal::Int);
        }

        if digits.bytes().all(|b| b.is_ascii_digit()) {
            if digits.len() > 1 && digits.starts_with('0') && digits.bytes().any(|b| b != b'0') {
                return Err(ParseError::new(
                    line,
                    column,
                    "leading zeros in decimal integer literals are not permitted",
                ));
            }
            let magnitude: u64 = digits.parse().map_err(|_| invalid())?;
            return signed_int(magnitude, negative)
                .map(Literal::Int)
                .ok_or_else(|| ParseError::new(line, column, format!("integer '{}' out of range", text)));
        }

        if !digits.chars().any(|c| matches!(c, '.' | 'e' | 'E'))
            || digits.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
        {
            return Err(invalid());
        }
        let value: f64 = digits.parse().map_err(|_| invalid())?;
        Ok(Literal::Float(if negative { -value } else { value }))
    }

    /// One or more adjacent string literals, concatenated.
    fn strings(&mut self) -> Result<Literal, ParseError> {
        let mut text = self.string()?;
        loop {
            self.skip_trivia();
            match self.peek() {
                Some('\'') | Some('"') => text.push_str(&self.string()?),
                _ => return Ok(Literal::Str(text)),
            }
        }
    }

    fn string(&mut self) -> Result<String, ParseError> {
        let Some(quote) = self.bump() else {
            return Err(self.error("expected string"));
        };
        let mut text = String::new();
        loop {
            match self.bump() {
                None | Some('\n') => return Err(self.error("unterminated string")),
                Some('\\') => self.escape(&mut text)?,
                Some(ch) if ch == quote => return Ok(text),
                Some(ch) => text.push(ch),
            }
        }
    }

    fn escape(&mut self, text: &mut String) -> Result<(), ParseError> {
        match self.bump() {
            Some('\\') => text.push('\\'),
            Some('\'') => text.push('\''),
            Some('"') => text.push('"'),
            Some('n') => text.push('\n'),
            Some('r') => text.push('\r'),
            Some('t') => text.push('\t'),
            Some('0') => text.push('\0'),
            // line continuation
            Some('\n') => {}
            Some('x') => text.push(self.hex_escape(2)?),
            Some('u') => text.push(self.hex_escape(4)?),
            Some(ch) => {
                text.push('\\');
                text.push(ch);
            }
            None => return Err(self.error("unterminated string")),
        }
        Ok(())
    }

    fn hex_escape(&mut self, len: usize) -> Result<char, ParseError> {
        let mut code = 0u32;
        for _ in 0..len {
            let digit = self
                .peek()
                .and_then(|ch| ch.to_digit(16))
                .ok_or_else(|| self.error("truncated escape sequence"))?;
            self.bump();
            code = code * 16 + digit;
        }
        char::from_u32(code).ok_or_else(|| self.error("invalid escape sequence"))
    }

    /// Comma-separated items up to `close`. Returns the items and whether a
    /// comma was seen after the last one.
    fn items(&mut self, close: char, depth: usize) -> Result<(Vec<Literal>, bool), ParseError> {
        let mut items = Vec::new();
        let mut trailing_comma = false;
        loop {
            self.skip_trivia();
            if self.peek() == Some(close) {
                self.bump();
                return Ok((items, trailing_comma));
            }
            items.push(self.value(depth + 1)?);
            self.skip_trivia();
            match self.peek() {
                Some(',') => {
                    self.bump();
                    trailing_comma = true;
                }
                Some(ch) if ch == close => {
                    self.bump();
                    return Ok((items, false));
                }
                Some(ch) => {
                    return Err(self.error(format!("expected ',' or '{}', found '{}'", close, ch)))
                }
                None => return Err(self.error(format!("expected '{}', found end of input", close))),
            }
        }
    }

    fn tuple(&mut self, depth: usize) -> Result<Literal, ParseError> {
        self.expect('(')?;
        let (mut items, trailing_comma) = self.items(')', depth)?;
        // `(x)` is just `x`
        if items.len() == 1 && !trailing_comma {
            return Ok(items.remove(0));
        }
        Ok(Literal::Tuple(items))
    }

    fn list(&mut self, depth: usize) -> Result<Literal, ParseError> {
        self.expect('[')?;
        let (items, _) = self.items(']', depth)?;
        Ok(Literal::List(items))
    }

    fn dict(&mut self, depth: usize) -> Result<Literal, ParseError> {
        self.expect('{')?;
        let mut entries = Vec::new();
        loop {
            self.skip_trivia();
            if self.peek() == Some('}') {
                self.bump();
                return Ok(Literal::Dict(entries));
            }
            let key = self.value(depth + 1)?;
            if matches!(key, Literal::List(_) | Literal::Dict(_)) {
                return Err(self.error(format!("unhashable dict key of type {}", key.kind())));
            }
            self.expect(':')?;
            let value = self.value(depth + 1)?;
            match entries.iter_mut().find(|(existing, _)| *existing == key) {
                Some(entry) => entry.1 = value,
                None => entries.push((key, value)),
            }
            self.skip_trivia();
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some('}') => {
                    self.bump();
                    return Ok(Literal::Dict(entries));
                }
                Some(ch) => return Err(self.error(format!("expected ',' or '}}', found '{}'", ch))),
                None => return Err(self.error("expected '}', found end of input")),
            }
        }
    }
}

fn is_radix_prefixed(text: &str) -> bool {
    radix_split(text).is_some()
}

/// `_` may only sit between two digits, or right after a radix prefix.
fn underscores_valid(text: &str) -> bool {
    let hex = matches!(radix_split(text), Some((16, _)));
    let is_digit = |b: u8| {
        if hex {
            b.is_ascii_hexdigit()
        } else {
            b.is_ascii_digit()
        }
    };
    let bytes = text.as_bytes();
    bytes
        .iter()
        .enumerate()
        .filter(|&(_, &b)| b == b'_')
        .all(|(i, _)| {
            let after_prefix = i == 2 && is_radix_prefixed(text);
            let before = i > 0 && (after_prefix || is_digit(bytes[i - 1]));
            let after = bytes.get(i + 1).is_some_and(|&b| is_digit(b));
            before && after
        })
}

fn radix_split(text: &str) -> Option<(u32, &str)> {
    let lower = text.get(..2)?.to_ascii_lowercase();
    let radix = match lower.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    Some((radix, &text[2..]))
}

fn signed_int(magnitude: u64, negative: bool) -> Option<i64> {
    if negative {
        0i64.checked_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).ok()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(r: i64, g: i64, b: i64) -> Literal {
        Literal::Tuple(vec![Literal::Int(r), Literal::Int(g), Literal::Int(b)])
    }

    #[test]
    fn test_parse_scalars() {
        assert_eq!(parse("None").unwrap(), Literal::None);
        assert_eq!(parse("True").unwrap(), Literal::Bool(true));
        assert_eq!(parse("  False  ").unwrap(), Literal::Bool(false));
        assert_eq!(parse("42").unwrap(), Literal::Int(42));
        assert_eq!(parse("-42").unwrap(), Literal::Int(-42));
        assert_eq!(parse("1_000").unwrap(), Literal::Int(1000));
        assert_eq!(parse("0").unwrap(), Literal::Int(0));
        assert_eq!(parse("0xFF").unwrap(), Literal::Int(255));
        assert_eq!(parse("0o17").unwrap(), Literal::Int(15));
        assert_eq!(parse("-0b101").unwrap(), Literal::Int(-5));
    }

    #[test]
    fn test_parse_floats() {
        assert_eq!(parse("1.5").unwrap(), Literal::Float(1.5));
        assert_eq!(parse(".5").unwrap(), Literal::Float(0.5));
        assert_eq!(parse("2.").unwrap(), Literal::Float(2.0));
        assert_eq!(parse("1e3").unwrap(), Literal::Float(1000.0));
        assert_eq!(parse("-2.5E-2").unwrap(), Literal::Float(-0.025));
    }

    #[test]
    fn test_parse_int_bounds() {
        assert_eq!(
            parse("-9223372036854775808").unwrap(),
            Literal::Int(i64::MIN)
        );
        let err = parse("9223372036854775808").unwrap_err();
        assert!(err.message.contains("out of range"));
    }

    #[test]
    fn test_parse_rejects_leading_zeros() {
        assert!(parse("007").is_err());
        assert_eq!(parse("000").unwrap(), Literal::Int(0));
    }

    #[test]
    fn test_parse_underscores_only_between_digits() {
        assert_eq!(parse("1_000.000_1").unwrap(), Literal::Float(1000.0001));
        assert_eq!(parse("1e1_0").unwrap(), Literal::Float(1e10));
        assert_eq!(parse("0x_ff_ff").unwrap(), Literal::Int(0xffff));
        assert_eq!(parse("0b_1_0").unwrap(), Literal::Int(2));

        for source in ["1_.5", "1._5", "1e_5", "1_e5", "_1", "1_", "1__0", "0x__f", "0_x1"] {
            assert!(parse(source).is_err(), "{} should be rejected", source);
        }
    }

    #[test]
    fn test_parse_strings() {
        assert_eq!(parse("'red'").unwrap(), Literal::from("red"));
        assert_eq!(parse("\"it's\"").unwrap(), Literal::from("it's"));
        assert_eq!(parse(r"'a\nb\t\x41é'").unwrap(), Literal::from("a\nb\tAé"));
        assert_eq!(parse("'ab' \"cd\"").unwrap(), Literal::from("abcd"));
    }

    #[test]
    fn test_parse_tuples() {
        assert_eq!(parse("()").unwrap(), Literal::Tuple(vec![]));
        assert_eq!(parse("(1,)").unwrap(), Literal::Tuple(vec![Literal::Int(1)]));
        assert_eq!(parse("(1)").unwrap(), Literal::Int(1));
        assert_eq!(parse("(255, 0, 0)").unwrap(), rgb(255, 0, 0));
        assert_eq!(parse("(255, 0, 0,)").unwrap(), rgb(255, 0, 0));
    }

    #[test]
    fn test_parse_nested_multiline_with_comments() {
        let source = "# warm palette\n(\n  (255, 0, 0),  # red\n  [0, 128, 0],\n)\n";
        let expected = Literal::Tuple(vec![
            rgb(255, 0, 0),
            Literal::List(vec![Literal::Int(0), Literal::Int(128), Literal::Int(0)]),
        ]);
        assert_eq!(parse(source).unwrap(), expected);
    }

    #[test]
    fn test_parse_dict_keeps_order_and_last_duplicate() {
        let value = parse("{'b': 1, 'a': 2, 'b': 3}").unwrap();
        assert_eq!(
            value,
            Literal::Dict(vec![
                (Literal::from("b"), Literal::Int(3)),
                (Literal::from("a"), Literal::Int(2)),
            ])
        );
        assert_eq!(parse("{}").unwrap(), Literal::Dict(vec![]));
    }

    #[test]
    fn test_parse_rejects_unhashable_key() {
        let err = parse("{[1]: 2}").unwrap_err();
        assert!(err.message.contains("unhashable"));
    }

    #[test]
    fn test_parse_error_positions() {
        let err = parse("(1, 2,\n  @)").unwrap_err();
        assert_eq!((err.line, err.column), (2, 3));

        let err = parse("(1, 2").unwrap_err();
        assert!(err.message.contains("end of input"));

        let err = parse("red").unwrap_err();
        assert_eq!((err.line, err.column), (1, 1));
        assert!(err.message.contains("not a literal"));
    }

    #[test]
    fn test_parse_rejects_empty_and_trailing() {
        assert!(parse("").unwrap_err().message.contains("empty"));
        assert!(parse("  # only a comment\n").is_err());
        assert!(parse("1 2").unwrap_err().message.contains("trailing"));
        assert!(parse("'open").unwrap_err().message.contains("unterminated"));
    }

    #[test]
    fn test_parse_depth_limit() {
        let deep = format!("{}{}", "[".repeat(MAX_DEPTH + 2), "]".repeat(MAX_DEPTH + 2));
        assert!(parse(&deep).unwrap_err().message.contains("too deep"));
        let shallow = format!("{}{}", "[".repeat(10), "]".repeat(10));
        assert!(parse(&shallow).is_ok());
    }
}
