//! Lexer for the JsonUI text format using logos
//!
//! The on-disk format is a JSON superset: `//` and `/* */` comments,
//! trailing commas, single-quoted strings, and unquoted object keys are
//! all tolerated on input. Output is always strict JSON (see `printer`).

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
pub enum Token {
    // Literal keywords
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("null")]
    Null,

    // Delimiters
    #[token("{")]
    BraceOpen,
    #[token("}")]
    BraceClose,
    #[token("[")]
    BracketOpen,
    #[token("]")]
    BracketClose,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,

    // Literals - identifiers must come after keywords
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*", |lex| lex.slice().to_string(), priority = 1)]
    Ident(String),

    #[regex(r#""([^"\\]|\\.)*""#, |lex| {
        let s = lex.slice();
        unescape(&s[1..s.len()-1])
    })]
    #[regex(r#"'([^'\\]|\\.)*'"#, |lex| {
        let s = lex.slice();
        unescape(&s[1..s.len()-1])
    })]
    String(String),

    #[regex(r"[+-]?[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    #[regex(r"[+-]?\.[0-9]+([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    // Comments (skip)
    #[regex(r"//[^\n]*", logos::skip)]
    LineComment,

    #[regex(r"/\*([^*]|\*[^/])*\*/", logos::skip)]
    BlockComment,
}

/// Decode the escape sequences of a quoted string body.
///
/// Returns None on a malformed escape, which surfaces as a lex error and
/// ultimately a parse error at that span.
fn unescape(raw: &str) -> Option<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next()? {
            '"' => out.push('"'),
            '\'' => out.push('\''),
            '\\' => out.push('\\'),
            '/' => out.push('/'),
            'b' => out.push('\u{0008}'),
            'f' => out.push('\u{000c}'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'v' => out.push('\u{000b}'),
            '0' => out.push('\0'),
            // Escaped line break is a line continuation
            '\n' => {}
            'u' => {
                let mut code = 0u32;
                for _ in 0..4 {
                    code = code * 16 + chars.next()?.to_digit(16)?;
                }
                out.push(char::from_u32(code)?);
            }
            'x' => {
                let mut code = 0u32;
                for _ in 0..2 {
                    code = code * 16 + chars.next()?.to_digit(16)?;
                }
                out.push(char::from_u32(code)?);
            }
            _ => return None,
        }
    }
    Some(out)
}

/// Lex input string into tokens with spans
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiters() {
        let tokens: Vec<_> = lex("{ } [ ] , :").map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![
                Token::BraceOpen,
                Token::BraceClose,
                Token::BracketOpen,
                Token::BracketClose,
                Token::Comma,
                Token::Colon
            ]
        );
    }

    #[test]
    fn test_literal_keywords() {
        let tokens: Vec<_> = lex("true false null").map(|(t, _)| t).collect();
        assert_eq!(tokens, vec![Token::True, Token::False, Token::Null]);
    }

    #[test]
    fn test_numbers() {
        let tokens: Vec<_> = lex("42 3.14 -10 1e3 .5").map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![
                Token::Number(42.0),
                Token::Number(3.14),
                Token::Number(-10.0),
                Token::Number(1000.0),
                Token::Number(0.5),
            ]
        );
    }

    #[test]
    fn test_strings_and_identifiers() {
        let tokens: Vec<_> = lex(r#""button" anchor_from 'single'"#)
            .map(|(t, _)| t)
            .collect();
        assert_eq!(
            tokens,
            vec![
                Token::String("button".to_string()),
                Token::Ident("anchor_from".to_string()),
                Token::String("single".to_string()),
            ]
        );
    }

    #[test]
    fn test_string_escapes() {
        let tokens: Vec<_> = lex(r#""a\nb" "A" "\"q\"""#).map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![
                Token::String("a\nb".to_string()),
                Token::String("A".to_string()),
                Token::String("\"q\"".to_string()),
            ]
        );
    }

    #[test]
    fn test_comments_skipped() {
        let tokens: Vec<_> = lex("{ // comment\n } /* block */ [")
            .map(|(t, _)| t)
            .collect();
        assert_eq!(
            tokens,
            vec![Token::BraceOpen, Token::BraceClose, Token::BracketOpen]
        );
    }

    #[test]
    fn test_complete_example() {
        let input = r#"
            {
              "btn": { type: "button", size: [100, 40], } // trailing comma
            }
        "#;
        let tokens: Vec<_> = lex(input).map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![
                Token::BraceOpen,
                Token::String("btn".to_string()),
                Token::Colon,
                Token::BraceOpen,
                Token::Ident("type".to_string()),
                Token::Colon,
                Token::String("button".to_string()),
                Token::Comma,
                Token::Ident("size".to_string()),
                Token::Colon,
                Token::BracketOpen,
                Token::Number(100.0),
                Token::Comma,
                Token::Number(40.0),
                Token::BracketClose,
                Token::Comma,
                Token::BraceClose,
                Token::BraceClose,
            ]
        );
    }
}
