//! Splitting raw dictionary text into candidate words

use crate::dictionary::InitializeError;
use nom::{
	branch::alt,
	bytes::complete::tag,
	character::complete::{char as char_p, multispace1, satisfy},
	combinator::{map, not, recognize},
	multi::{many0, many1},
	IResult, Parser,
};
use nom_supreme::ParserExt;
use regex::Regex;

/// Everything that is neither a letter nor a number in any script
const STRIPPED_CHARACTERS: &str = r"[^\p{L}\p{N}]";

pub(crate) struct Tokenizer {
	strip: Regex,
}

impl Tokenizer {
	pub(crate) fn new() -> Result<Self, InitializeError> {
		Ok(Self {
			strip: Regex::new(STRIPPED_CHARACTERS)?,
		})
	}

	/// Normalized words of a line, in order. Words may be empty when a token
	/// held nothing but punctuation.
	pub(crate) fn words(&self, line: &str) -> Result<Vec<String>, InitializeError> {
		let (_, tokens) = Self::tokens
			.all_consuming()
			.parse(line)
			.map_err(|e: nom::Err<nom::error::Error<_>>| InitializeError::Parser(e.to_string()))?;

		Ok(tokens.into_iter().map(|t| self.normalize(t)).collect())
	}

	/// Drop punctuation and fold case, `"Don't!"` becomes `"dont"`
	pub(crate) fn normalize(&self, token: &str) -> String {
		self.strip.replace_all(token, "").to_lowercase()
	}

	/// Tokens are separated by whitespace or by a double dash.
	fn tokens(i: &str) -> IResult<&str, Vec<&str>> {
		let separator = alt((multispace1, tag("--")));

		map(
			many0(alt((map(separator, |_| None), map(Self::token, Some)))),
			|tokens: Vec<Option<&str>>| tokens.into_iter().flatten().collect(),
		)(i)
	}

	/// A single dash stays in the token unless a second one follows.
	fn token(i: &str) -> IResult<&str, &str> {
		let plain = satisfy(|c| c != '-' && !c.is_whitespace());
		let lone_dash = char_p('-').terminated(not(char_p('-')));

		recognize(many1(alt((plain, lone_dash)))).parse(i)
	}
}
