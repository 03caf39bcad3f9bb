//! Best-effort extraction of structured data from free-form completions.

use once_cell::sync::Lazy;
use regex::Regex;

// ASCII only. Unicode `\d` would glue full-width or Arabic-Indic digits onto
// an ASCII run and the whole run would then fail to parse.
static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").expect("static pattern"));

/// Extracts all ASCII integer substrings, in order, deduplicated, keeping at
/// most `max_ids`. Digit runs that do not fit in a `u64` are skipped.
///
/// The model is asked for one id per line but nothing enforces it, so this
/// also accepts `"3, 5, 1"`, `"Tool 3"` or JSON arrays. Numbers that are not
/// ids (list numbering, years) come through too; callers that know the valid
/// id set should filter afterwards.
pub fn extract_tool_ids(text: &str, max_ids: usize) -> Vec<u64> {
    let mut ids = Vec::new();
    for m in INTEGER.find_iter(text) {
        if ids.len() >= max_ids {
            break;
        }
        if let Ok(id) = m.as_str().parse::<u64>() {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
    }
    ids
}
