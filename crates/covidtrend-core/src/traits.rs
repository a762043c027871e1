// crates/covidtrend-core/src/traits.rs
use crate::model::ZipRecord;

/// Positional text fields of a search candidate.
///
/// The suggestion matcher searches "field N" of each candidate, the same way
/// a row of a lookup table is addressed by column. Implementors return
/// `None` for indices they don't have; such candidates never match.
///
/// # Examples
/// ```rust
/// use covidtrend_core::traits::SearchFields;
///
/// let row = ("36061", "New York");
/// assert_eq!(row.field(1), Some("New York"));
/// assert_eq!(row.field(2), None);
/// ```
pub trait SearchFields {
    fn field(&self, index: usize) -> Option<&str>;
}

impl<A: AsRef<str>, B: AsRef<str>> SearchFields for (A, B) {
    fn field(&self, index: usize) -> Option<&str> {
        match index {
            0 => Some(self.0.as_ref()),
            1 => Some(self.1.as_ref()),
            _ => None,
        }
    }
}

impl<S: AsRef<str>> SearchFields for [S] {
    fn field(&self, index: usize) -> Option<&str> {
        self.get(index).map(AsRef::as_ref)
    }
}

impl<S: AsRef<str>> SearchFields for Vec<S> {
    fn field(&self, index: usize) -> Option<&str> {
        self.as_slice().field(index)
    }
}

impl SearchFields for ZipRecord {
    fn field(&self, index: usize) -> Option<&str> {
        match index {
            0 => Some(&self.zip),
            1 => Some(&self.fips),
            2 => Some(&self.city),
            3 => Some(&self.state),
            4 => Some(&self.county),
            _ => None,
        }
    }
}

/// Builds navigation links for result rows.
///
/// The engine never knows the routing scheme; it asks the builder for an
/// opaque href per region id.
pub trait LinkBuilder: Send + Sync {
    fn county_href(&self, fips: &str) -> String;
    fn state_href(&self, fips: &str) -> String;
}
