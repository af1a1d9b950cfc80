//! keypad-suggest
//!
//! Predictive text for 12-key telephone keypads: every word of a corpus is
//! filed under the digits typed to spell it, then a digit sequence is answered
//! with the words it spells exactly and the words it starts, most frequent
//! first.
//!
//! ```
//! use keypad_suggest::{Dictionary, Key};
//!
//! let dict = Dictionary::from_slice("cat cat cap").unwrap();
//! let key: Key = "22".parse().unwrap();
//! assert_eq!(dict.prefix(&key), ["cat", "cap"]);
//! ```

mod corpus;
mod dictionary;
pub mod keypad;
mod rank;
mod suggest;
mod trie;

pub use dictionary::{Dictionary, InitializeError, LoadStats};
pub use keypad::{encode, Digit, EncodeError, InvalidKeyError, Key};
pub use rank::{rank, RankedWordTable};
pub use suggest::Suggestions;
pub use trie::DigitTrie;
