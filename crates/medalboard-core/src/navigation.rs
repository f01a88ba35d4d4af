//! # Navigation Module
//!
//! The Navigation Validator: decides whether a requested country id, or a
//! clicked chart slice, names an existing record.
//!
//! The validator only decides *where* to go. Performing the redirect is the
//! routing layer's job.

use crate::record::CountryRecord;
use crate::CountryId;

/// Outcome of a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    Found(&'a CountryRecord),
    NotFound,
}

impl<'a> Resolution<'a> {
    /// The matched record, if any.
    #[must_use]
    pub fn record(self) -> Option<&'a CountryRecord> {
        match self {
            Self::Found(record) => Some(record),
            Self::NotFound => None,
        }
    }

    /// Where the router should send the user.
    #[must_use]
    pub fn destination(self) -> Destination {
        match self {
            Self::Found(record) => Destination::Detail(record.id),
            Self::NotFound => Destination::NotFound,
        }
    }
}

/// A navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Home,
    Detail(CountryId),
    NotFound,
}

impl Destination {
    /// The route path for this destination.
    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::Home => String::from("/"),
            Self::Detail(id) => format!("/country/{id}"),
            Self::NotFound => String::from("/not-found"),
        }
    }
}

/// Parse a route parameter into a country id.
///
/// Any numeric text whose value is a positive whole number names a country:
/// `2`, `+2`, `2.0`, `2e0` and `0x2` all give id 2. Returns `None` for empty
/// input, non-numeric text, fractions, infinities, zero and negative numbers.
#[must_use]
pub fn parse_route_id(raw: &str) -> Option<CountryId> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }
    let value = match radix_prefixed(text) {
        Some(parsed) => parsed?,
        None => whole_number(text)?,
    };
    Some(CountryId(value)).filter(|id| id.is_valid())
}

/// `0x`, `0o` and `0b` literals. `None` when `text` has no such prefix,
/// `Some(None)` when the prefix is followed by anything but digits.
fn radix_prefixed(text: &str) -> Option<Option<i64>> {
    let (radix, digits) = match text.get(..2)? {
        "0x" | "0X" => (16, &text[2..]),
        "0o" | "0O" => (8, &text[2..]),
        "0b" | "0B" => (2, &text[2..]),
        _ => return None,
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(None);
    }
    Some(i64::from_str_radix(digits, radix).ok())
}

/// Decimal text, possibly with a fraction or exponent, that holds a whole
/// number small enough for `f64` to represent exactly.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn whole_number(text: &str) -> Option<i64> {
    if let Ok(value) = text.parse::<i64>() {
        return Some(value);
    }
    if !text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return None;
    }
    let value = text.parse::<f64>().ok()?;
    let in_range = value.is_finite() && value.abs() < 9.0e15;
    (in_range && value.trunc() == value).then_some(value as i64)
}

/// Find the record with the given id.
///
/// Invalid ids short-circuit to `NotFound` without searching.
#[must_use]
pub fn resolve_country(countries: &[CountryRecord], id: CountryId) -> Resolution<'_> {
    if !id.is_valid() {
        return Resolution::NotFound;
    }
    countries
        .iter()
        .find(|c| c.id == id)
        .map_or(Resolution::NotFound, Resolution::Found)
}

/// Map a zero-based chart index back to the record at that position.
///
/// The index must come from a chart built with
/// [`country_medal_totals`](crate::country_medal_totals) over the same slice.
#[must_use]
pub fn resolve_selection_index(countries: &[CountryRecord], index: usize) -> Resolution<'_> {
    countries
        .get(index)
        .map_or(Resolution::NotFound, Resolution::Found)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ParticipationRecord;
    use proptest::prelude::*;

    fn sample() -> Vec<CountryRecord> {
        vec![
            CountryRecord::new(
                1,
                "France",
                vec![
                    ParticipationRecord::new(2000, 10, 50),
                    ParticipationRecord::new(2004, 5, 40),
                ],
            ),
            CountryRecord::new(2, "Italy", vec![ParticipationRecord::new(2000, 8, 30)]),
        ]
    }

    #[test]
    fn resolves_present_id() {
        let countries = sample();
        let found = resolve_country(&countries, CountryId(2)).record();
        assert_eq!(found.map(|c| c.country.as_str()), Some("Italy"));
    }

    #[test]
    fn absent_id_redirects() {
        let countries = sample();
        let resolution = resolve_country(&countries, CountryId(3));
        assert_eq!(resolution, Resolution::NotFound);
        assert_eq!(resolution.destination(), Destination::NotFound);
    }

    #[test]
    fn zero_id_is_rejected_even_if_present() {
        let countries = vec![CountryRecord::new(0, "Nowhere", vec![])];
        assert_eq!(resolve_country(&countries, CountryId(0)), Resolution::NotFound);
    }

    #[test]
    fn route_parsing_rejects_non_ids() {
        assert_eq!(parse_route_id("abc"), None);
        assert_eq!(parse_route_id(""), None);
        assert_eq!(parse_route_id("0"), None);
        assert_eq!(parse_route_id("-3"), None);
        assert_eq!(parse_route_id("1.5"), None);
        assert_eq!(parse_route_id("2.5e0"), None);
        assert_eq!(parse_route_id("0.0"), None);
        assert_eq!(parse_route_id("-2.0"), None);
        assert_eq!(parse_route_id("NaN"), None);
        assert_eq!(parse_route_id("inf"), None);
        assert_eq!(parse_route_id("1e400"), None);
        assert_eq!(parse_route_id("0x"), None);
        assert_eq!(parse_route_id("0x-2"), None);
        assert_eq!(parse_route_id("0xg"), None);
        assert_eq!(parse_route_id(" 4 "), Some(CountryId(4)));
    }

    #[test]
    fn route_parsing_accepts_whole_numbers_in_any_notation() {
        for raw in ["2", "+2", "02", "2.0", "2.", "2e0", "0.2e1", "0x2", "0X02", "0b10", "0o2"] {
            assert_eq!(parse_route_id(raw), Some(CountryId(2)), "{raw}");
        }
    }

    #[test]
    fn whole_number_notations_open_the_matching_country() {
        let countries = sample();
        for raw in ["2.0", "2e0", "0x2"] {
            let id = parse_route_id(raw);
            let destination = id.map(|id| resolve_country(&countries, id).destination());
            assert_eq!(destination, Some(Destination::Detail(CountryId(2))), "{raw}");
        }
    }

    #[test]
    fn clicked_slice_maps_to_country_at_index() {
        let countries = sample();
        let resolution = resolve_selection_index(&countries, 1);

        assert_eq!(resolution.record().map(|c| c.id), Some(CountryId(2)));
        assert_eq!(resolution.destination().path(), "/country/2");
    }

    #[test]
    fn clicked_index_past_end_is_not_found() {
        assert_eq!(resolve_selection_index(&sample(), 2), Resolution::NotFound);
        assert_eq!(resolve_selection_index(&[], 0), Resolution::NotFound);
    }

    #[test]
    fn destination_paths() {
        assert_eq!(Destination::Home.path(), "/");
        assert_eq!(Destination::NotFound.path(), "/not-found");
        assert_eq!(Destination::Detail(CountryId(7)).path(), "/country/7");
    }

    proptest! {
        #[test]
        fn selection_and_totals_agree(names in prop::collection::vec("[A-Z][a-z]{2,8}", 1..10), pick in 0usize..10) {
            let countries: Vec<_> = names
                .iter()
                .enumerate()
                .map(|(i, name)| CountryRecord::new(i as i64 + 1, name.clone(), vec![]))
                .collect();
            let totals = crate::country_medal_totals(&countries);
            match resolve_selection_index(&countries, pick).record() {
                Some(record) => prop_assert_eq!(&totals[pick].country, &record.country),
                None => prop_assert!(pick >= countries.len()),
            }
        }

        #[test]
        fn every_present_id_resolves_to_itself(count in 1i64..20) {
            let countries: Vec<_> = (1..=count)
                .map(|id| CountryRecord::new(id, format!("C{id}"), vec![]))
                .collect();
            for id in 1..=count {
                let record = resolve_country(&countries, CountryId(id)).record();
                prop_assert_eq!(record.map(|c| c.id), Some(CountryId(id)));
            }
            prop_assert_eq!(resolve_country(&countries, CountryId(count + 1)), Resolution::NotFound);
        }
    }
}
