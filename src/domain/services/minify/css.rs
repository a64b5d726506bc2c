//! Stylesheet minification.

/// Characters that never need surrounding whitespace.
const TIGHT: &[char] = &['{', '}', ';', ',', '>'];

/// Minify a stylesheet: strip comments, collapse whitespace, drop spaces
/// around punctuation and the last `;` of each block.
///
/// Quoted strings are copied unchanged. A space before `:` is kept so
/// descendant pseudo selectors (`div :hover`) keep their meaning.
pub fn minify_css(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut pending_space = false;
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        if ch == '/' && chars.get(i + 1) == Some(&'*') {
            i += 2;
            while i < chars.len() && !(chars[i] == '*' && chars.get(i + 1) == Some(&'/')) {
                i += 1;
            }
            i += 2;
            pending_space = true;
            continue;
        }

        if ch.is_whitespace() {
            pending_space = true;
            i += 1;
            continue;
        }

        if pending_space {
            pending_space = false;
            let prev = out.chars().last();
            let keep = match prev {
                None => false,
                Some(p) => !TIGHT.contains(&p) && p != ':' && !TIGHT.contains(&ch),
            };
            if keep {
                out.push(' ');
            }
        }

        if ch == '}' && out.ends_with(';') {
            out.pop();
        }

        if ch == '"' || ch == '\'' {
            out.push(ch);
            i += 1;
            while i < chars.len() {
                let c = chars[i];
                out.push(c);
                i += 1;
                if c == '\\' {
                    if let Some(&escaped) = chars.get(i) {
                        out.push(escaped);
                        i += 1;
                    }
                } else if c == ch {
                    break;
                }
            }
            continue;
        }

        out.push(ch);
        i += 1;
    }

    out
}
