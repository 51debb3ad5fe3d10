//! Parser implementation using chumsky

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;
use indexmap::IndexMap;

use crate::parser::lexer::Token;
use crate::parser::value::Value;

/// Parse document text into a value tree
///
/// A leading byte-order mark is tolerated and stripped; files saved by
/// some Windows editors carry one.
pub fn parse(input: &str) -> Result<Value, Vec<crate::ParseError>> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let len = input.len();

    // Create a logos lexer and convert to token stream
    let token_iter = crate::parser::lexer::lex(input).map(|(tok, span)| (tok, span.into()));

    // Turn the token iterator into a stream that chumsky can use
    let token_stream = Stream::from_iter(token_iter)
        // Split (Token, SimpleSpan) into token and span parts
        .map((len..len).into(), |(t, s): (_, _)| (t, s));

    document_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| errs.into_iter().map(|e| e.into()).collect())
}

fn document_parser<'a, I>() -> impl Parser<'a, I, Value, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    value_parser().then_ignore(end())
}

fn value_parser<'a, I>() -> impl Parser<'a, I, Value, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    recursive(|value| {
        // Object keys may be quoted strings or bare identifiers
        let member_key = select! {
            Token::String(s) => s,
            Token::Ident(s) => s,
        };

        let member = member_key
            .then_ignore(just(Token::Colon))
            .then(value.clone());

        let object = member
            .separated_by(just(Token::Comma))
            .allow_trailing()
            .collect::<Vec<(String, Value)>>()
            .delimited_by(just(Token::BraceOpen), just(Token::BraceClose))
            // Duplicate keys: last value wins, first occurrence keeps its slot
            .map(|members| Value::Object(members.into_iter().collect::<IndexMap<_, _>>()));

        let array = value
            .separated_by(just(Token::Comma))
            .allow_trailing()
            .collect::<Vec<Value>>()
            .delimited_by(just(Token::BracketOpen), just(Token::BracketClose))
            .map(Value::Array);

        choice((
            just(Token::Null).to(Value::Null),
            just(Token::True).to(Value::Bool(true)),
            just(Token::False).to(Value::Bool(false)),
            select! { Token::Number(n) => Value::Number(n) },
            select! { Token::String(s) => Value::String(s) },
            object,
            array,
        ))
    })
}
