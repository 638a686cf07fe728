use rustc_hash::FxHashSet;
use rustyline::completion::Completer;
use rustyline::completion::Pair;
use rustyline::Context;

/// Completes the word under the cursor from a fixed set of names
pub struct StringCompleter {
    names: FxHashSet<String>,
}

impl StringCompleter {
    pub fn from<I: Into<String>>(input: Vec<I>) -> Self {
        Self {
            names: input.into_iter().map(Into::into).collect(),
        }
    }

    fn complete_word(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let start = word_start(line, pos);
        let word = &line[start..pos];

        if word.is_empty() {
            return (pos, vec![]);
        }

        let mut matches: Vec<Pair> = self
            .names
            .iter()
            .filter(|name| name.starts_with(word))
            .map(|name| Pair {
                display: name.clone(),
                replacement: name.clone(),
            })
            .collect();

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        (start, matches)
    }
}

// identifiers end at whitespace and parentheses
fn word_start(line: &str, pos: usize) -> usize {
    line[..pos]
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace() || *c == '(' || *c == ')' || *c == '\'')
        .map(|(idx, c)| idx + c.len_utf8())
        .unwrap_or(0)
}

impl Completer for StringCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.complete_word(line, pos))
    }
}
