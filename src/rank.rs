//! Word frequency tables and their ranking
//!
//! Ranking orders words by descending count. Words sharing a count are
//! ordered by ascending byte-wise comparison of the words, so the output of a
//! query never depends on hash order.

use std::{
	cmp::Reverse,
	collections::{BTreeMap, HashMap},
};

/// Occurrence count of every word stored under one key
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RankedWordTable {
	counts: HashMap<String, u64>,
}

impl RankedWordTable {
	/// Count one more occurrence of `word` and return its new count
	pub fn add_word(&mut self, word: &str) -> u64 {
		if let Some(count) = self.counts.get_mut(word) {
			*count = count.saturating_add(1);
			return *count;
		}

		self.counts.insert(word.to_owned(), 1);
		1
	}

	/// How many times `word` was added, if ever
	#[must_use]
	pub fn count(&self, word: &str) -> Option<u64> {
		self.counts.get(word).copied()
	}

	/// Number of distinct words
	#[must_use]
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	/// Whether no word was ever added
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Words with their counts, in no particular order
	pub fn entries(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
		self.counts.iter().map(|(word, count)| (word.as_str(), *count))
	}

	/// Words from most to least frequent
	#[must_use]
	pub fn ranked_words(&self) -> Vec<&str> {
		rank(self.entries())
	}
}

/// Order `(word, count)` pairs from highest to lowest count.
///
/// Entries are grouped by count first; inside a group words are sorted
/// ascending. A word given twice appears twice, merge counts beforehand.
pub fn rank<'a>(entries: impl IntoIterator<Item = (&'a str, u64)>) -> Vec<&'a str> {
	let mut groups: BTreeMap<Reverse<u64>, Vec<&'a str>> = BTreeMap::new();
	for (word, count) in entries {
		groups.entry(Reverse(count)).or_default().push(word);
	}

	groups
		.into_values()
		.flat_map(|mut group| {
			group.sort_unstable();
			group
		})
		.collect()
}
