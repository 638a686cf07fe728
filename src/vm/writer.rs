use crate::compiler::frontend::reader::symbol::{SYMBOL_SPECIAL_INITIAL, SYMBOL_SPECIAL_SUBSEQUENT};
use crate::vm::value::{list, Value};
use rustc_hash::FxHashSet;

/// The writer creates the external representation of values.
///
/// Data is written so that the reader can read it back: strings are escaped
/// and symbols that would not read as identifiers are delimited with `|`.
/// Procedures and the unspecified value have no readable form.
#[derive(Debug)]
pub struct Writer {
    symbol_special_initial: FxHashSet<char>,
    symbol_special_subsequent: FxHashSet<char>,
}

impl Writer {
    pub fn new() -> Self {
        Writer {
            symbol_special_initial: SYMBOL_SPECIAL_INITIAL.chars().collect(),
            symbol_special_subsequent: SYMBOL_SPECIAL_SUBSEQUENT.chars().collect(),
        }
    }

    pub fn write(&self, v: &Value) -> String {
        match v {
            Value::Bool(true) => "#t".to_string(),
            Value::Bool(false) => "#f".to_string(),
            Value::Number(n) => self.write_number(*n),
            Value::String(s) => self.write_string(s),
            Value::Symbol(s) => self.write_symbol(s.as_str()),
            Value::EmptyList => "()".to_string(),
            Value::Pair(_) => self.write_pairs(v),
            Value::PrimitiveOp(op) => format!("#<primitive {}>", op),
            Value::Closure(closure) => {
                let formals: Vec<&str> = closure.formals().iter().map(|f| f.as_str()).collect();
                format!("#<closure ({})>", formals.join(" "))
            }
            Value::Void => "#<void>".to_string(),
        }
    }

    fn write_number(&self, n: f64) -> String {
        match n {
            n if n.is_nan() => String::from("+nan.0"),
            n if n.is_infinite() && n.is_sign_negative() => String::from("-inf.0"),
            n if n.is_infinite() => String::from("+inf.0"),
            _ => format!("{}", n),
        }
    }

    fn write_string(&self, s: &str) -> String {
        let mut external = String::with_capacity(s.len() + 2);
        external.push('"');

        for c in s.chars() {
            match c {
                '"' => external.push_str("\\\""),
                '\\' => external.push_str("\\\\"),
                '\n' => external.push_str("\\n"),
                '\t' => external.push_str("\\t"),
                '\r' => external.push_str("\\r"),
                _ => external.push(c),
            }
        }

        external.push('"');
        external
    }

    fn write_symbol(&self, sym: &str) -> String {
        if self.is_plain_identifier(sym) {
            sym.to_string()
        } else {
            format!("|{}|", sym.replace('|', "\\|"))
        }
    }

    fn is_plain_identifier(&self, sym: &str) -> bool {
        let mut chars = sym.chars();

        match chars.next() {
            None => false,
            Some(c) if self.is_initial(c) => chars.all(|c| self.is_subsequent(c)),
            Some('+') | Some('-') => match chars.next() {
                None => true,
                Some(c) if c.is_ascii_digit() || c == '.' => false,
                Some(c) => self.is_subsequent(c) && chars.all(|c| self.is_subsequent(c)),
            },
            Some('.') => sym == "...",
            Some(_) => false,
        }
    }

    fn is_initial(&self, c: char) -> bool {
        c.is_alphabetic() || self.symbol_special_initial.contains(&c)
    }

    fn is_subsequent(&self, c: char) -> bool {
        self.is_initial(c) || c.is_ascii_digit() || self.symbol_special_subsequent.contains(&c)
    }

    fn write_pairs(&self, v: &Value) -> String {
        let elements: Vec<String> = list::iter(v).map(|e| self.write(e)).collect();
        let mut tail = v;

        while let Value::Pair(pair) = tail {
            tail = pair.cdr();
        }

        match tail {
            Value::EmptyList => format!("({})", elements.join(" ")),
            _ => format!("({} . {})", elements.join(" "), self.write(tail)),
        }
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}
