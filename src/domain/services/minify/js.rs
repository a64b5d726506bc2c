//! JavaScript minification for the asset compressor.
//!
//! A single left-to-right scan that:
//!
//! - copies string, template and regex literals verbatim;
//! - drops `/* */` and `//` comments, treating them as whitespace;
//! - collapses whitespace, keeping a space only between two word characters
//!   (or between `+ +`, `- -` and `/ /`), and keeping a newline wherever
//!   automatic semicolon insertion could depend on it.
//!
//! It never renames identifiers or rewrites expressions. When a construct is
//! ambiguous the input is emitted unchanged.

/// Keywords after which a `/` starts a regex literal rather than a division.
const REGEX_KEYWORDS: &[&str] = &[
    "return",
    "typeof",
    "case",
    "do",
    "else",
    "in",
    "of",
    "new",
    "delete",
    "void",
    "throw",
    "instanceof",
    "yield",
    "await",
];

#[derive(Clone, Copy, PartialEq, Eq)]
enum Gap {
    None,
    Space,
    Newline,
}

struct Minifier<'a> {
    chars: &'a [char],
    pos: usize,
    out: String,
    gap: Gap,
}

/// Minify a JavaScript source string.
pub fn minify_js(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut minifier = Minifier {
        chars: &chars,
        pos: 0,
        out: String::with_capacity(input.len()),
        gap: Gap::None,
    };
    minifier.run();
    minifier.out
}

impl Minifier<'_> {
    fn run(&mut self) {
        while let Some(ch) = self.peek(0) {
            match ch {
                '"' | '\'' | '`' => {
                    self.flush_gap(ch);
                    self.copy_string(ch);
                }
                '/' if self.peek(1) == Some('*') => self.skip_block_comment(),
                '/' if self.peek(1) == Some('/') => self.skip_line_comment(),
                '/' if self.regex_allowed() => {
                    self.flush_gap(ch);
                    self.copy_regex();
                }
                c if c == '\n' || c == '\r' => {
                    self.gap = Gap::Newline;
                    self.pos += 1;
                }
                c if c.is_whitespace() => {
                    if self.gap == Gap::None {
                        self.gap = Gap::Space;
                    }
                    self.pos += 1;
                }
                _ => {
                    self.flush_gap(ch);
                    self.out.push(ch);
                    self.pos += 1;
                }
            }
        }
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn copy_string(&mut self, quote: char) {
        self.out.push(quote);
        self.pos += 1;
        while let Some(ch) = self.peek(0) {
            self.out.push(ch);
            self.pos += 1;
            if ch == '\\' {
                if let Some(escaped) = self.peek(0) {
                    self.out.push(escaped);
                    self.pos += 1;
                }
            } else if ch == quote {
                return;
            }
        }
    }

    /// Copy `/.../flags` when a closing slash exists on the same line,
    /// otherwise emit the lone `/`.
    fn copy_regex(&mut self) {
        let start = self.pos;
        let mut end = start + 1;
        let mut in_class = false;
        let mut closed = false;

        while let Some(&ch) = self.chars.get(end) {
            match ch {
                '\n' | '\r' => break,
                '\\' => end += 1,
                '[' => in_class = true,
                ']' => in_class = false,
                '/' if !in_class => {
                    closed = true;
                    break;
                }
                _ => {}
            }
            end += 1;
        }

        if !closed {
            self.out.push('/');
            self.pos += 1;
            return;
        }

        self.out.extend(&self.chars[start..=end]);
        self.pos = end + 1;
    }

    fn skip_block_comment(&mut self) {
        self.pos += 2;
        let mut newline = false;
        while let Some(ch) = self.peek(0) {
            if ch == '*' && self.peek(1) == Some('/') {
                self.pos += 2;
                break;
            }
            newline |= ch == '\n' || ch == '\r';
            self.pos += 1;
        }
        self.gap = if newline || self.gap == Gap::Newline {
            Gap::Newline
        } else {
            Gap::Space
        };
    }

    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek(0) {
            if ch == '\n' || ch == '\r' {
                break;
            }
            self.pos += 1;
        }
        if self.gap == Gap::None {
            self.gap = Gap::Space;
        }
    }

    /// Whether a `/` at the current position opens a regex literal.
    fn regex_allowed(&self) -> bool {
        let trimmed = self.out.trim_end();
        let Some(prev) = trimmed.chars().last() else {
            return true;
        };
        if is_word_char(prev) {
            let word_start = trimmed
                .char_indices()
                .rev()
                .find(|&(_, c)| !is_word_char(c))
                .map(|(i, c)| i + c.len_utf8())
                .unwrap_or(0);
            return REGEX_KEYWORDS.contains(&&trimmed[word_start..]);
        }
        !matches!(prev, ')' | ']' | '"' | '\'' | '`')
    }

    fn flush_gap(&mut self, next: char) {
        let gap = std::mem::replace(&mut self.gap, Gap::None);
        if gap == Gap::None {
            return;
        }
        let Some(prev) = self.out.chars().last() else {
            return;
        };

        if gap == Gap::Newline && self.ends_statement(prev) && starts_statement(next) {
            self.out.push('\n');
            return;
        }

        let merges = (prev == '+' && next == '+')
            || (prev == '-' && next == '-')
            || (prev == '/' && (next == '/' || next == '*'));
        if merges || (is_word_char(prev) && is_word_char(next)) {
            self.out.push(' ');
        }
    }

    fn ends_statement(&self, prev: char) -> bool {
        match prev {
            ')' | ']' | '}' | '"' | '\'' | '`' => true,
            '+' => self.out.ends_with("++"),
            '-' => self.out.ends_with("--"),
            c => is_word_char(c),
        }
    }
}

fn starts_statement(next: char) -> bool {
    is_word_char(next) || matches!(next, '(' | '[' | '{' | '"' | '\'' | '`' | '+' | '-' | '!' | '~')
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '$'
}
