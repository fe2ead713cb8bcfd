//! Lenient N-Triples decoder
//!
//! The input is read line by line. Minor formatting issues are tolerated:
//! blank and comment lines, runs of spaces or tabs between terms, a missing
//! final `.`, trailing comments, several statements on one line and unknown
//! escape sequences. A structurally broken statement (for instance a missing
//! subject) fails the whole document: callers never see a partial decode.

use super::vocab::BLANK_NODE_PREFIX;
use oxrdf::{BlankNode, Literal, NamedNode, Term};
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;
use std::fmt;
use thiserror::Error;

#[derive(Parser)]
#[grammar = "rdf/ntriples.pest"]
struct NTriplesGrammar;

/// What went wrong on a rejected line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeProblem {
    InvalidSubject,
    InvalidPredicate,
    InvalidObject,
    MissingTerminator,
    InvalidUtf8,
}

impl fmt::Display for DecodeProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DecodeProblem::InvalidSubject => "invalid subject",
            DecodeProblem::InvalidPredicate => "invalid predicate",
            DecodeProblem::InvalidObject => "invalid object",
            DecodeProblem::MissingTerminator => "missing statement terminator",
            DecodeProblem::InvalidUtf8 => "invalid utf-8",
        })
    }
}

/// Decode error
///
/// The rendered message is matched on by downstream callers and must keep the
/// `lenient parsing: line <N>: <problem> in <excerpt>` shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("lenient parsing: line {line}: {problem} in {excerpt}")]
pub struct DecodeError {
    /// 1-based line number
    pub line: usize,
    pub problem: DecodeProblem,
    /// The offending line, trimmed
    pub excerpt: String,
}

impl DecodeError {
    fn new(line: usize, problem: DecodeProblem, excerpt: &str) -> Self {
        Self {
            line,
            problem,
            excerpt: excerpt.trim().to_string(),
        }
    }
}

pub type DecodeResult<T> = Result<T, DecodeError>;

/// A decoded statement whose object has not been classified yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTriple {
    /// Source line (1-based)
    pub line: usize,
    /// Subject IRI, or `_:`-prefixed blank node label
    pub subject: String,
    /// Predicate IRI
    pub predicate: String,
    pub object: Term,
}

/// Decode an N-Triples document.
///
/// Empty input yields no triples. Output order follows input order.
pub fn decode(input: &[u8]) -> DecodeResult<Vec<RawTriple>> {
    let mut triples = Vec::new();

    for (index, raw_line) in input.split(|b| *b == b'\n').enumerate() {
        let line_no = index + 1;
        let raw_line = raw_line.strip_suffix(b"\r").unwrap_or(raw_line);
        let line = std::str::from_utf8(raw_line).map_err(|_| {
            DecodeError::new(
                line_no,
                DecodeProblem::InvalidUtf8,
                &String::from_utf8_lossy(raw_line),
            )
        })?;

        decode_line(line, line_no, &mut triples)?;
    }

    Ok(triples)
}

fn decode_line(line: &str, line_no: usize, out: &mut Vec<RawTriple>) -> DecodeResult<()> {
    let fail = |problem: DecodeProblem| DecodeError::new(line_no, problem, line);
    let mut rest = skip_blank(line);

    while !at_line_end(rest) {
        let (subject, tail) = parse_term(Rule::subject, rest)
            .and_then(|(pair, tail)| Some((subject_value(pair)?, tail)))
            .ok_or_else(|| fail(DecodeProblem::InvalidSubject))?;

        let (predicate, tail) = parse_term(Rule::predicate, skip_blank(tail))
            .and_then(|(pair, tail)| Some((predicate_value(pair)?, tail)))
            .ok_or_else(|| fail(DecodeProblem::InvalidPredicate))?;

        let (object, tail) = parse_term(Rule::object, skip_blank(tail))
            .and_then(|(pair, tail)| Some((object_term(pair)?, tail)))
            .ok_or_else(|| fail(DecodeProblem::InvalidObject))?;

        rest = skip_blank(tail);
        match rest.strip_prefix('.') {
            Some(after) => rest = skip_blank(after),
            None if at_line_end(rest) => {}
            None => return Err(fail(DecodeProblem::MissingTerminator)),
        }

        out.push(RawTriple {
            line: line_no,
            subject,
            predicate,
            object,
        });
    }

    Ok(())
}

fn skip_blank(s: &str) -> &str {
    s.trim_start_matches([' ', '\t'])
}

fn at_line_end(s: &str) -> bool {
    s.is_empty() || s.starts_with('#')
}

/// Match `rule` at the start of `input`, returning the pair and the unread tail
fn parse_term(rule: Rule, input: &str) -> Option<(Pair<'_, Rule>, &str)> {
    let pair = NTriplesGrammar::parse(rule, input).ok()?.next()?;
    let end = pair.as_span().end();
    Some((pair, &input[end..]))
}

fn subject_value(pair: Pair<'_, Rule>) -> Option<String> {
    let term = pair.into_inner().next()?;
    match term.as_rule() {
        Rule::iri_ref => iri_value(term),
        Rule::blank_node => Some(format!("{}{}", BLANK_NODE_PREFIX, blank_label(term)?)),
        _ => None,
    }
}

fn predicate_value(pair: Pair<'_, Rule>) -> Option<String> {
    iri_value(pair.into_inner().next()?)
}

fn object_term(pair: Pair<'_, Rule>) -> Option<Term> {
    let term = pair.into_inner().next()?;
    let decoded: Term = match term.as_rule() {
        Rule::iri_ref => NamedNode::new_unchecked(iri_value(term)?).into(),
        Rule::blank_node => BlankNode::new_unchecked(blank_label(term)?).into(),
        Rule::literal => literal_value(term)?.into(),
        _ => return None,
    };
    Some(decoded)
}

fn iri_value(pair: Pair<'_, Rule>) -> Option<String> {
    let body = pair.into_inner().next()?;
    Some(unescape(body.as_str()))
}

fn blank_label(pair: Pair<'_, Rule>) -> Option<String> {
    pair.into_inner().next().map(|label| label.as_str().to_owned())
}

fn literal_value(pair: Pair<'_, Rule>) -> Option<Literal> {
    let mut inner = pair.into_inner();
    let value = unescape(inner.next()?.as_str());

    let literal = match inner.next() {
        None => Literal::new_simple_literal(value),
        Some(tag) if tag.as_rule() == Rule::lang_tag => {
            let language = tag.into_inner().next()?;
            Literal::new_language_tagged_literal_unchecked(value, language.as_str())
        }
        Some(datatype) => {
            let iri = iri_value(datatype.into_inner().next()?)?;
            Literal::new_typed_literal(value, NamedNode::new_unchecked(iri))
        }
    };
    Some(literal)
}

/// Resolve `\`-escapes. Unknown or truncated escapes are kept as written.
fn unescape(raw: &str) -> String {
    if !raw.contains('\\') {
        return raw.to_owned();
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('b') => out.push('\u{8}'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some('"') => out.push('"'),
            Some('\'') => out.push('\''),
            Some('\\') => out.push('\\'),
            Some(marker @ ('u' | 'U')) => {
                let width = if marker == 'u' { 4 } else { 8 };
                let digits: String = chars.clone().take(width).collect();
                let decoded = (digits.len() == width
                    && digits.chars().all(|d| d.is_ascii_hexdigit()))
                .then(|| u32::from_str_radix(&digits, 16).ok())
                .flatten()
                .and_then(char::from_u32);

                match decoded {
                    Some(ch) => {
                        out.push(ch);
                        chars.nth(width - 1);
                    }
                    None => {
                        out.push('\\');
                        out.push(marker);
                    }
                }
            }
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}
