//! Logic of the [`Dictionary`] to suggest words for a digit sequence

use crate::{keypad::Key, Dictionary};
use std::{collections::HashSet, fmt};

/// Words a digit sequence could stand for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestions<'a> {
	/// The sequence typed
	pub key: Key,
	/// Words spelled by exactly these digits, `None` when there are none
	pub exact: Option<Vec<&'a str>>,
	/// Longer words starting with these digits, without the exact matches
	pub prefix: Vec<&'a str>,
	/// Whether any word at all starts with these digits, exact matches
	/// included
	pub any_prefix: bool,
}

/// Methods for querying the dictionary
impl Dictionary {
	/// Words typed exactly as `key`, most frequent first
	#[must_use]
	pub fn exact(&self, key: &Key) -> Option<Vec<&str>> {
		self.trie.retrieve(key)
	}

	/// Words whose encoding starts with `key`, most frequent first
	#[must_use]
	pub fn prefix(&self, key: &Key) -> Vec<&str> {
		self.trie.retrieve_prefix_matches(key)
	}

	/// Exact matches, then every other word starting with the same digits
	#[must_use]
	pub fn suggest(&self, key: &Key) -> Suggestions<'_> {
		let exact = self.exact(key);

		let seen = exact.iter().flatten().copied().collect::<HashSet<_>>();
		let all_prefix = self.prefix(key);
		let any_prefix = !all_prefix.is_empty();
		let prefix = all_prefix
			.into_iter()
			.filter(|word| !seen.contains(word))
			.collect::<Vec<_>>();

		log::debug!(
			"{key}: {} exact matches, {} further prefix matches",
			exact.as_ref().map_or(0, Vec::len),
			prefix.len()
		);

		Suggestions {
			key: key.clone(),
			exact,
			prefix,
			any_prefix,
		}
	}
}

impl fmt::Display for Suggestions<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "Exact matches for {}:", self.key)?;
		match &self.exact {
			Some(words) => {
				for word in words {
					writeln!(f, "{word}")?;
				}
			}
			None => writeln!(f, "No sequences found!")?,
		}

		writeln!(f, "Prefix matches for {}:", self.key)?;
		if !self.any_prefix {
			writeln!(f, "No matches found for the given prefix!")?;
		}
		for word in &self.prefix {
			writeln!(f, "{word}")?;
		}

		Ok(())
	}
}
