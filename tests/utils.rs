use keypad_suggest::{Dictionary, Key};

#[derive(Debug, thiserror::Error)]
#[error("{0} queries failed to return the expected suggestions")]
struct SuggestErrors(usize);

/// A query and what it must answer
pub(crate) struct Expect<'a> {
	pub(crate) sequence: &'a str,
	/// `None` when no word is spelled by exactly these digits
	pub(crate) exact: Option<&'a [&'a str]>,
	pub(crate) prefix: &'a [&'a str],
}

pub(crate) fn test_corpus(
	corpus: &str,
	expectations: &[Expect<'_>],
) -> Result<(), Box<dyn std::error::Error>> {
	let _ = pretty_env_logger::try_init();

	let dict = Dictionary::from_slice(corpus)?;

	let mut errors = 0;
	for expect in expectations {
		let key = expect.sequence.parse::<Key>()?;

		let exact = dict.exact(&key);
		if exact.as_deref() == expect.exact {
			log::info!("{key} exactly spells {exact:?}");
		} else {
			log::error!("{key} should exactly spell {:?} but spells {exact:?}", expect.exact);
			errors += 1;
		}

		let prefix = dict.prefix(&key);
		if prefix == expect.prefix {
			log::info!("{key} starts {prefix:?}");
		} else {
			log::error!("{key} should start {:?} but starts {prefix:?}", expect.prefix);
			errors += 1;
		}
	}

	if errors == 0 {
		Ok(())
	} else {
		Err(Box::new(SuggestErrors(errors)))
	}
}
