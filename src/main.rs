//! Keypad suggest CLI
//!
//! Example: `suggest book.txt 4663` lists `good`, `home`, `gone`... then
//! longer words such as `goods` or `homes`.

use clap::Parser;
use keypad_suggest::{Dictionary, Key};
use std::{path::PathBuf, process::ExitCode};

/// Suggest the words a digit sequence typed on a phone keypad could stand for
#[derive(clap::Parser)]
#[command(version)]
struct Args {
	/// Text file whose words are suggested, ranked by how often they appear
	dictionary: PathBuf,

	/// Digits typed, each one of 2 to 9
	sequence: String,
}

fn main() -> ExitCode {
	pretty_env_logger::init();

	let args = match Args::try_parse() {
		Ok(args) => args,
		Err(err) if err.use_stderr() => {
			if let Err(io_err) = err.print() {
				log::error!("Could not print usage: {io_err}");
			}
			return ExitCode::from(1);
		}
		// help and version
		Err(err) => err.exit(),
	};

	if !args.dictionary.is_file() {
		log::error!("{} is not a valid file", args.dictionary.display());
		return ExitCode::from(2);
	}

	let key = match args.sequence.parse::<Key>() {
		Ok(key) => key,
		Err(err) => {
			log::error!("{err}");
			return ExitCode::from(1);
		}
	};

	let dict = match Dictionary::file(&args.dictionary) {
		Ok(dict) => dict,
		Err(err) => {
			log::error!("Could not load {}: {err}", args.dictionary.display());
			return ExitCode::from(1);
		}
	};

	print!("{}", dict.suggest(&key));

	ExitCode::SUCCESS
}
