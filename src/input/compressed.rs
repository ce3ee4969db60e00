use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::input::InputError;

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// File stem with trailing `.gz` and `.json` removed: `fairness.json.gz` -> `fairness`.
pub fn strip_response_suffixes(file_name: &str) -> &str {
    let name = file_name.strip_suffix(".gz").unwrap_or(file_name);
    name.strip_suffix(".json").unwrap_or(name)
}

const SAVED_RESPONSE_PREFIX: &str = "compl_ai_";
const TIMESTAMP_LEN: usize = "YYYYMMDD_HHMMSS".len();

/// Splits a saved response stem `compl_ai_<code>_<YYYYMMDD>_<HHMMSS>` into
/// category code and timestamp.
pub fn split_saved_response_name(stem: &str) -> Option<(&str, &str)> {
    let rest = stem.strip_prefix(SAVED_RESPONSE_PREFIX)?;
    let split = rest.len().checked_sub(TIMESTAMP_LEN)?;
    let stamp = rest.get(split..)?;
    let code = rest[..split].strip_suffix('_')?;
    if code.is_empty() || !is_timestamp(stamp) {
        return None;
    }
    Some((code, stamp))
}

/// Category code named by a response file: `fairness.json`,
/// `compl_ai_fairness_20250710_180431.json.gz` -> `fairness`.
pub fn category_code_from_file_name(file_name: &str) -> &str {
    let stem = strip_response_suffixes(file_name);
    split_saved_response_name(stem)
        .map(|(code, _)| code)
        .unwrap_or(stem)
}

fn is_timestamp(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == TIMESTAMP_LEN
        && b[8] == b'_'
        && b[..8].iter().all(u8::is_ascii_digit)
        && b[9..].iter().all(u8::is_ascii_digit)
}
