//! Marker-delimited section removal.
//!
//! A stub may contain named, conditionally-removable regions delimited by a
//! line-oriented marker pair:
//!
//! ```text
//! # SECTION:telemetry
//! ... anything, possibly spanning many lines ...
//! # END_SECTION:telemetry
//! ```
//!
//! Removal deletes the region *inclusive* of both marker lines.

use regex::Regex;

/// Remove every region delimited by the given section names.
///
/// For each name, every non-overlapping maximal region from `# SECTION:<name>`
/// to the *nearest* following `# END_SECTION:<name>` is deleted, markers
/// included, along with the end marker's trailing newline (so removing a
/// whole-line section does not leave a blank line behind). The scan is
/// non-greedy with dot-matches-newline semantics, so regions may span any
/// number of lines and multiple same-named sections are all removed.
///
/// Section names are escaped before being embedded in the pattern, so names
/// containing regex metacharacters are matched literally.
///
/// Two deliberate non-errors:
/// - a name whose markers never appear in the text is a silent no-op;
/// - a start marker with no matching end marker is left untouched (the
///   region simply never matches).
pub fn remove_sections<'a>(
    text: &str,
    names: impl IntoIterator<Item = &'a str>,
) -> Result<String, regex::Error> {
    let mut result = text.to_owned();

    for name in names {
        if name.is_empty() {
            continue;
        }
        let name = regex::escape(name);
        let pattern = format!(r"(?s)# SECTION:{name}.*?# END_SECTION:{name}(\r?\n)?");
        let re = Regex::new(&pattern)?;
        result = re.replace_all(&result, "").into_owned();
    }

    Ok(result)
}
