//! Width-bounded pretty printer for literals.
//!
//! A value whose single-line form fits in the remaining width is written
//! inline. Containers that do not fit are broken one item per line, with
//! items indented one column past the opening bracket:
//!
//! ```text
//! ((255,
//!   0,
//!   0),
//!  (0,
//!   0,
//!   255))
//! ```

use super::value::Literal;

/// Render `value` so that lines stay within `width` columns where the
/// structure allows it. Scalars longer than `width` are never split.
pub fn pretty(value: &Literal, width: usize) -> String {
    let mut printer = Printer {
        out: String::new(),
        width,
    };
    printer.format(value, 0, 0);
    printer.out
}

struct Printer {
    out: String,
    width: usize,
}

impl Printer {
    /// `indent` is the column the value starts at, `allowance` the number of
    /// closing characters that will follow it on the same line.
    fn format(&mut self, value: &Literal, indent: usize, allowance: usize) {
        let inline = value.to_string();
        let max_width = self.width.saturating_sub(indent + allowance);
        if inline.chars().count() <= max_width {
            self.out.push_str(&inline);
            return;
        }

        match value {
            Literal::Tuple(items) if !items.is_empty() => {
                let close = if items.len() == 1 { ",)" } else { ")" };
                self.out.push('(');
                self.items(items, indent + 1, allowance + close.len());
                self.out.push_str(close);
            }
            Literal::List(items) if !items.is_empty() => {
                self.out.push('[');
                self.items(items, indent + 1, allowance + 1);
                self.out.push(']');
            }
            Literal::Dict(entries) if !entries.is_empty() => {
                self.out.push('{');
                self.entries(entries, indent + 1, allowance + 1);
                self.out.push('}');
            }
            _ => self.out.push_str(&inline),
        }
    }

    fn items(&mut self, items: &[Literal], indent: usize, allowance: usize) {
        let last = items.len() - 1;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.newline(indent);
            }
            // every item but the last is followed by a comma
            let item_allowance = if i == last { allowance } else { 1 };
            self.format(item, indent, item_allowance);
        }
    }

    fn entries(&mut self, entries: &[(Literal, Literal)], indent: usize, allowance: usize) {
        let last = entries.len() - 1;
        for (i, (key, value)) in entries.iter().enumerate() {
            if i > 0 {
                self.newline(indent);
            }
            let key_text = key.to_string();
            self.out.push_str(&key_text);
            self.out.push_str(": ");
            let value_indent = indent + key_text.chars().count() + 2;
            let value_allowance = if i == last { allowance } else { 1 };
            self.format(value, value_indent, value_allowance);
        }
    }

    fn newline(&mut self, indent: usize) {
        self.out.push_str(",\n");
        self.out.extend(std::iter::repeat(' ').take(indent));
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
