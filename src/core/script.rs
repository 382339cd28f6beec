// src/core/script.rs
//
// Lexical identifier-invocation counter for script text. One forward
// scan, no syntax tree: an "invocation" is an identifier whose next
// non-whitespace character is `(`, outside strings and comments.
// Keywords that legally precede `(` are not calls.

use crate::process::CallCounts;

const KEYWORDS: &[&str] = &[
    "if", "for", "while", "switch", "catch", "return", "function",
    "do", "else", "typeof", "delete", "void", "in", "of", "new",
    "await", "yield",
];

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Count identifier invocations in `source`.
/// Member calls count the member name (`a.b()` counts `b`). Identifiers
/// land in the map in first-seen order. Total: malformed input degrades
/// to fewer matches, never an error.
pub fn count_invocations(source: &str) -> CallCounts {
    let mut counts = CallCounts::new();
    let mut chars = source.char_indices().peekable();

    while let Some((_, ch)) = chars.next() {
        match ch {
            // line comment
            '/' if matches!(chars.peek(), Some((_, '/'))) => {
                while let Some(&(_, c)) = chars.peek() {
                    if c == '\n' { break; }
                    chars.next();
                }
            }
            // block comment
            '/' if matches!(chars.peek(), Some((_, '*'))) => {
                chars.next();
                let mut prev = '\0';
                while let Some((_, c)) = chars.next() {
                    if prev == '*' && c == '/' { break; }
                    prev = c;
                }
            }
            // string literals, backslash-escape aware
            '\'' | '"' | '`' => {
                let quote = ch;
                while let Some((_, c)) = chars.next() {
                    if c == '\\' { chars.next(); continue; }
                    if c == quote { break; }
                }
            }
            c if is_ident_start(c) => {
                let mut ident = String::new();
                ident.push(c);
                while let Some(&(_, nc)) = chars.peek() {
                    if is_ident_char(nc) { ident.push(nc); chars.next(); } else { break; }
                }

                // look past whitespace for the opening paren
                let mut look = chars.clone();
                let mut called = false;
                while let Some(&(_, nc)) = look.peek() {
                    if nc.is_whitespace() { look.next(); continue; }
                    called = nc == '(';
                    break;
                }

                if called && !KEYWORDS.contains(&ident.as_str()) {
                    *counts.entry(ident).or_insert(0) += 1;
                }
            }
            _ => {}
        }
    }

    counts
}
