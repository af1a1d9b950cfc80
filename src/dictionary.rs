//! High level interface to index a text corpus by keypad sequence
//!
//! Entrypoint methods are
//! - [`Dictionary::file`]: reads and indexes every word of a text file
//! - [`Dictionary::suggest`]: lists the words a digit sequence could stand for

use crate::{
	corpus::Tokenizer,
	keypad::{self, EncodeError, Key},
	trie::DigitTrie,
};
use std::{
	fs::File,
	io::{self, BufRead, BufReader},
	path::Path,
};

/// Words of a corpus, indexed by the digits typed to spell them
#[derive(Debug, Default)]
pub struct Dictionary {
	pub(crate) trie: DigitTrie,
	stats: LoadStats,
}

/// What happened while loading a corpus
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
	/// Lines read
	pub lines: usize,
	/// Words indexed, repetitions included
	pub words: usize,
	/// Tokens left out because they could not be typed on a keypad
	pub skipped: usize,
}

/// Ways initializing a [`Dictionary`] could go wrong
#[derive(Debug, thiserror::Error)]
pub enum InitializeError {
	/// Could not tokenize a line of the corpus
	#[error("Could not parse file: {0}")]
	Parser(String),

	/// Could not build the punctuation filter
	#[error(transparent)]
	Regex(#[from] regex::Error),

	/// Could not correctly read the given corpus
	#[error(transparent)]
	Io(#[from] io::Error),
}

/// Constructors
impl Dictionary {
	/// # Errors
	///
	/// Will error if a line of `content` cannot be tokenized.
	pub fn from_slice(content: &str) -> Result<Self, InitializeError> {
		Self::from_reader(content.as_bytes())
	}

	/// Reads `reader` line by line, every line split into words which are
	/// then indexed.
	///
	/// Bytes that are not valid UTF-8 are replaced with `U+FFFD`, which is then
	/// stripped like any other punctuation.
	///
	/// # Errors
	///
	/// Will error if the reader fails.
	pub fn from_reader(reader: impl BufRead) -> Result<Self, InitializeError> {
		let tokenizer = Tokenizer::new()?;
		let mut dict = Self::default();

		for line in reader.split(b'\n') {
			let line = line?;
			dict.stats.lines += 1;
			for word in tokenizer.words(&String::from_utf8_lossy(&line))? {
				match dict.insert(&word) {
					Ok(_) => dict.stats.words += 1,
					Err(err) => {
						log::trace!("skipping `{word}`: {err}");
						dict.stats.skipped += 1;
					}
				}
			}
		}

		log::info!(
			"Indexed {} words ({} distinct) from {} lines, skipped {} tokens",
			dict.stats.words,
			dict.trie.len(),
			dict.stats.lines,
			dict.stats.skipped
		);

		Ok(dict)
	}

	/// # Errors
	///
	/// Will error if the file cannot be opened or read.
	pub fn file(path: &Path) -> Result<Self, InitializeError> {
		log::info!("Parsing file {}", path.display());
		let file = File::open(path)?;
		Self::from_reader(BufReader::new(file))
	}
}

impl Dictionary {
	/// Count one occurrence of an already normalized `word`, returning the key
	/// it was filed under.
	///
	/// # Errors
	///
	/// Will error, leaving the dictionary untouched, if the word cannot be
	/// typed on a keypad.
	pub fn insert(&mut self, word: &str) -> Result<Key, EncodeError> {
		let key = keypad::encode(word)?;
		self.trie.insert(&key, word);
		Ok(key)
	}

	/// Counters gathered while loading
	#[must_use]
	pub const fn stats(&self) -> &LoadStats {
		&self.stats
	}

	/// Underlying index
	#[must_use]
	pub const fn trie(&self) -> &DigitTrie {
		&self.trie
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn load_counts() -> Result<(), Box<dyn std::error::Error>> {
		let dict = Dictionary::from_slice("dog dog dog cat\nR2-D2 -- caf\u{e9}\n\n...\n")?;

		assert_eq!(
			dict.stats(),
			&LoadStats {
				lines: 4,
				words: 4,
				skipped: 3,
			}
		);
		assert_eq!(dict.trie().len(), 2);
		Ok(())
	}

	#[test]
	fn insert_normalized_words() -> Result<(), Box<dyn std::error::Error>> {
		let mut dict = Dictionary::default();
		assert_eq!(dict.insert("cat")?.to_string(), "228");
		assert_eq!(dict.insert("Cat"), Err(EncodeError::Unmappable('C')));
		assert_eq!(dict.insert(""), Err(EncodeError::Empty));
		assert_eq!(dict.trie().len(), 1);
		Ok(())
	}

	#[test]
	fn invalid_utf8_is_stripped() -> Result<(), Box<dyn std::error::Error>> {
		let dict = Dictionary::from_reader(&b"cat cat dog\ncaf\xe9 home \xff\xfe\n"[..])?;

		assert_eq!(dict.stats().lines, 2);
		assert_eq!(dict.stats().words, 5);
		assert_eq!(dict.stats().skipped, 1);
		assert_eq!(dict.exact(&"228".parse::<Key>()?), Some(vec!["cat"]));
		assert_eq!(dict.exact(&"223".parse::<Key>()?), Some(vec!["caf"]));
		assert_eq!(dict.exact(&"4663".parse::<Key>()?), Some(vec!["home"]));
		Ok(())
	}

	/// Hands out one line, then fails
	struct BrokenReader {
		served: bool,
	}

	impl io::Read for BrokenReader {
		fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
			Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
		}
	}

	impl BufRead for BrokenReader {
		fn fill_buf(&mut self) -> io::Result<&[u8]> {
			if self.served {
				Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
			} else {
				Ok(&b"cat dog\n"[..])
			}
		}

		fn consume(&mut self, _amt: usize) {
			self.served = true;
		}
	}

	#[test]
	fn read_failures_abort_the_load() {
		let res = Dictionary::from_reader(BrokenReader { served: false });
		assert!(matches!(res, Err(InitializeError::Io(_))));
	}
}
