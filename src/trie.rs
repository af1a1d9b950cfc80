use crate::{
	keypad::{Key, RADIX},
	rank::{self, RankedWordTable},
};
use std::collections::HashMap;

/// R-way trie over keypad digits, each node possibly holding the words typed
/// with the digits leading to it
#[derive(Debug, Default)]
pub struct DigitTrie {
	root: TrieNode,
	/// Distinct `(key, word)` pairs stored
	len: usize,
}

#[derive(Debug, Default)]
struct TrieNode {
	/// One slot per digit, see [`crate::Digit::index`]
	leaves: [Option<Box<Self>>; RADIX],
	/// Present once a word has been inserted with a key ending here
	words: Option<RankedWordTable>,
}

impl TrieNode {
	/// Pre-order walk: own words first, then children from `2` to `9`
	fn collect<'a>(&'a self, merged: &mut HashMap<&'a str, u64>) {
		if let Some(words) = &self.words {
			for (word, count) in words.entries() {
				let total = merged.entry(word).or_default();
				*total = total.saturating_add(count);
			}
		}

		for leaf in self.leaves.iter().flatten() {
			leaf.collect(merged);
		}
	}
}

impl DigitTrie {
	/// Number of distinct `(key, word)` pairs inserted
	#[must_use]
	pub const fn len(&self) -> usize {
		self.len
	}

	/// Whether no word was ever inserted
	#[must_use]
	pub const fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Count one occurrence of `word` typed as `key`, creating missing nodes
	/// along the way
	pub fn insert(&mut self, key: &Key, word: &str) {
		let mut current = &mut self.root;
		for digit in key.digits() {
			current = &mut **current.leaves[digit.index()].get_or_insert_with(Box::default);
		}

		let words = current.words.get_or_insert_with(RankedWordTable::default);
		if words.add_word(word) == 1 {
			self.len += 1;
		}
	}

	/// Words typed exactly as `key`, most frequent first.
	///
	/// `None` when no word was ever inserted under this key, even if longer
	/// keys go through it.
	#[must_use]
	pub fn retrieve(&self, key: &Key) -> Option<Vec<&str>> {
		self.node(key)?
			.words
			.as_ref()
			.filter(|words| !words.is_empty())
			.map(RankedWordTable::ranked_words)
	}

	/// Words whose keys start with `key`, including `key` itself, most
	/// frequent first.
	///
	/// A word found under several keys is ranked by its summed count.
	#[must_use]
	pub fn retrieve_prefix_matches(&self, key: &Key) -> Vec<&str> {
		let Some(node) = self.node(key) else {
			return Vec::new();
		};

		let mut merged = HashMap::new();
		node.collect(&mut merged);
		rank::rank(merged)
	}

	fn node(&self, key: &Key) -> Option<&TrieNode> {
		key.digits()
			.iter()
			.try_fold(&self.root, |current, digit| current.leaves[digit.index()].as_deref())
	}
}
