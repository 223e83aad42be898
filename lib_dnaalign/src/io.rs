//! Loading of sequence pairs from plain text.
//!
//! A sequence pair consists of exactly two non-empty lines.
//! Whitespace around the pair and at the end of each line is ignored.

use std::io::Read;

use log::debug;
use nom::{
    IResult, Parser,
    bytes::complete::take_till1,
    character::complete::{line_ending, satisfy},
    multi::many0,
};

use crate::error::{Error, Result};

/// Reads two sequences, one per line.
pub fn read_sequence_pair(mut reader: impl Read) -> Result<(String, String)> {
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .map_err(|error| Error::InvalidInput(format!("unable to read sequence pair: {error}")))?;

    parse_sequence_pair_complete(&input)
}

pub fn parse_sequence_pair_complete(input: &str) -> Result<(String, String)> {
    let (remaining, (seq1, seq2)) = parse_sequence_pair(input).map_err(|error| {
        translate_nom_error(
            error,
            "expected exactly two non-empty lines containing one sequence each",
        )
    })?;

    if !remaining.is_empty() {
        return Err(Error::InvalidInput(format!(
            "expected exactly two lines, but found further input '{}'",
            remaining.lines().next().unwrap_or_default()
        )));
    }

    debug!(
        "Parsed sequence pair of lengths {} and {}",
        seq1.len(),
        seq2.len()
    );
    Ok((seq1.to_string(), seq2.to_string()))
}

pub fn parse_sequence_pair(input: &str) -> IResult<&str, (&str, &str)> {
    let input = skip_any_whitespace(input)?;
    let (input, seq1) = parse_line(input)?;
    let input = line_ending(input)?.0;
    let (input, seq2) = parse_line(input)?;
    let input = skip_any_whitespace(input)?;
    Ok((input, (seq1, seq2)))
}

fn parse_line(input: &str) -> IResult<&str, &str> {
    let (input, line) = take_till1(is_any_line_break)(input)?;
    let line = line.trim();
    if line.is_empty() {
        Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::TakeTill1,
        )))
    } else {
        Ok((input, line))
    }
}

pub fn skip_any_whitespace(
    input: &str,
) -> std::result::Result<&str, nom::Err<nom::error::Error<&str>>> {
    many0(satisfy(is_any_whitespace))
        .parse(input)
        .map(|(input, _)| input)
}

pub fn is_any_whitespace(c: char) -> bool {
    c.is_whitespace()
}

pub fn is_any_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

fn translate_nom_error(error: nom::Err<nom::error::Error<&str>>, expectation: &str) -> Error {
    match error {
        nom::Err::Incomplete(needed) => {
            Error::InvalidInput(format!("{expectation}, but input is incomplete ({needed:?})"))
        }
        nom::Err::Error(error) | nom::Err::Failure(error) => Error::InvalidInput(format!(
            "{expectation}, but parsing failed ({:?}) at '{}'",
            error.code,
            error.input.lines().next().unwrap_or_default()
        )),
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;

    use super::{parse_sequence_pair_complete, read_sequence_pair};

    #[test]
    fn two_lines() {
        assert_eq!(
            read_sequence_pair("GATTACA\nGCATGCU\n".as_bytes()),
            Ok(("GATTACA".to_string(), "GCATGCU".to_string()))
        );
        assert_eq!(
            parse_sequence_pair_complete("\n  ACGT  \r\nTT\t\r\n\n"),
            Ok(("ACGT".to_string(), "TT".to_string()))
        );
        assert_eq!(
            parse_sequence_pair_complete("A\nC"),
            Ok(("A".to_string(), "C".to_string()))
        );
    }

    #[test]
    fn wrong_line_count() {
        assert!(matches!(
            parse_sequence_pair_complete(""),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            parse_sequence_pair_complete("ACGT\n"),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            parse_sequence_pair_complete("ACGT\nAC\nGG\n"),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            parse_sequence_pair_complete("ACGT\n\nAC\n"),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn unreadable_source() {
        let invalid_utf8: &[u8] = &[b'A', b'\n', 0xff, 0xfe];
        assert!(matches!(
            read_sequence_pair(invalid_utf8),
            Err(Error::InvalidInput(_))
        ));
    }
}
