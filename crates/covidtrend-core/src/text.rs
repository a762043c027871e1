// crates/covidtrend-core/src/text.rs

/// First two characters of a county FIPS code, i.e. the parent state's code.
///
/// Returns `None` for ids shorter than two characters (or not splittable on a
/// char boundary), which callers treat as "no parent".
#[inline]
pub fn state_prefix(fips: &str) -> Option<&str> {
    fips.get(..2)
}
