//! Telephone keypad model
//!
//! A [`Key`] is what a user types: a non-empty run of [`Digit`]s between `2`
//! and `9`. Words are turned into keys with [`encode`].

use std::{fmt, str::FromStr};

/// Number of letter-bearing keys on a 12-key keypad, `2` through `9`
pub const RADIX: usize = 8;

/// Letters printed on each key, indexed by [`Digit::index`]
const LETTER_GROUPS: [&str; RADIX] = ["abc", "def", "ghi", "jkl", "mno", "pqrs", "tuv", "wxyz"];

/// Why some text could not be used as a keypad sequence
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidKeyError {
	/// No digit at all
	#[error("Invalid input sequence, it must contain at least one digit")]
	Empty,

	/// A character that no letter-bearing key carries
	#[error("Invalid input sequence, out of range [2-9]: found `{character}` at position {position}")]
	OutOfRange {
		/// The offending character
		character: char,
		/// Character offset of the offending character
		position: usize,
	},
}

/// Why a word has no keypad encoding
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
	/// Nothing left to encode
	#[error("cannot encode an empty word")]
	Empty,

	/// The word holds a character outside every letter group
	#[error("can't convert char: `{0}`")]
	Unmappable(char),
}

/// One of the keys `2` to `9`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
	/// Digit printed as `c`, if it is one of `2` to `9`
	#[must_use]
	pub fn from_char(c: char) -> Option<Self> {
		let byte = u8::try_from(c).ok()?;
		(b'2'..=b'9').contains(&byte).then(|| Self(byte - b'2'))
	}

	/// Key carrying the lowercase ASCII letter `c`
	#[must_use]
	pub fn from_letter(c: char) -> Option<Self> {
		LETTER_GROUPS
			.iter()
			.position(|group| group.contains(c))
			.and_then(|index| u8::try_from(index).ok())
			.map(Self)
	}

	/// Child slot of this digit in a trie node, `0` for `2` up to `7` for `9`
	#[must_use]
	pub const fn index(self) -> usize {
		self.0 as usize
	}

	/// The digit as typed
	#[must_use]
	pub fn as_char(self) -> char {
		char::from(b'2' + self.0)
	}

	/// Letters printed on this key
	#[must_use]
	pub const fn letters(self) -> &'static str {
		LETTER_GROUPS[self.index()]
	}
}

impl fmt::Display for Digit {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_char())
	}
}

/// A non-empty sequence of keypad digits
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(Vec<Digit>);

impl Key {
	/// Digits from first typed to last
	#[must_use]
	pub fn digits(&self) -> &[Digit] {
		&self.0
	}

	/// Number of digits, never zero
	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Always `false`, a key holds at least one digit
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl FromStr for Key {
	type Err = InvalidKeyError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let digits = s
			.chars()
			.enumerate()
			.map(|(position, character)| {
				Digit::from_char(character)
					.ok_or(InvalidKeyError::OutOfRange { character, position })
			})
			.collect::<Result<Vec<_>, _>>()?;

		if digits.is_empty() {
			return Err(InvalidKeyError::Empty);
		}

		Ok(Self(digits))
	}
}

impl fmt::Display for Key {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for digit in &self.0 {
			write!(f, "{digit}")?;
		}
		Ok(())
	}
}

/// Turn a normalized word (e.g. `cat`) into the digits typed to spell it
/// (e.g. `228`).
///
/// # Errors
///
/// Fails on an empty word or on the first character that is not a lowercase
/// ASCII letter; uppercase letters and digits are not mapped.
pub fn encode(word: &str) -> Result<Key, EncodeError> {
	let digits = word
		.chars()
		.map(|c| Digit::from_letter(c).ok_or(EncodeError::Unmappable(c)))
		.collect::<Result<Vec<_>, _>>()?;

	if digits.is_empty() {
		return Err(EncodeError::Empty);
	}

	Ok(Key(digits))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_letter_lands_on_its_key() -> Result<(), EncodeError> {
		assert_eq!(encode("abcdefghijklmnopqrstuvwxyz")?.to_string(), "22233344455566677778889999");
		assert_eq!(encode("cat")?.to_string(), "228");
		assert_eq!(encode("cap")?.to_string(), "227");
		assert_eq!(encode("dog")?.to_string(), "364");
		Ok(())
	}

	#[test]
	fn unmappable_words_are_refused() {
		assert_eq!(encode(""), Err(EncodeError::Empty));
		assert_eq!(encode("r2d2"), Err(EncodeError::Unmappable('2')));
		assert_eq!(encode("Cat"), Err(EncodeError::Unmappable('C')));
		assert_eq!(encode("café"), Err(EncodeError::Unmappable('é')));
	}

	#[test]
	fn parse_keys() -> Result<(), InvalidKeyError> {
		let key: Key = "23456789".parse()?;
		assert_eq!(key.len(), 8);
		assert_eq!(key.to_string(), "23456789");
		assert_eq!(
			key.digits().iter().map(|d| d.index()).collect::<Vec<_>>(),
			(0..RADIX).collect::<Vec<_>>()
		);
		Ok(())
	}

	#[test]
	fn refuse_out_of_range_keys() {
		assert_eq!("".parse::<Key>(), Err(InvalidKeyError::Empty));
		assert_eq!(
			"25a".parse::<Key>(),
			Err(InvalidKeyError::OutOfRange { character: 'a', position: 2 })
		);
		assert_eq!(
			"2104".parse::<Key>(),
			Err(InvalidKeyError::OutOfRange { character: '1', position: 1 })
		);
		assert_eq!(
			"0".parse::<Key>(),
			Err(InvalidKeyError::OutOfRange { character: '0', position: 0 })
		);
		assert_eq!(
			"é2".parse::<Key>(),
			Err(InvalidKeyError::OutOfRange { character: 'é', position: 0 })
		);
	}

	#[test]
	fn digits_know_their_letters() {
		let letters = ('2'..='9')
			.filter_map(Digit::from_char)
			.map(Digit::letters)
			.collect::<String>();
		assert_eq!(letters, "abcdefghijklmnopqrstuvwxyz");
		assert_eq!(Digit::from_letter('s').map(Digit::as_char), Some('7'));
		assert_eq!(Digit::from_char('1'), None);
	}
}
