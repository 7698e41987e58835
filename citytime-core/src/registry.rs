//! Static registry of the supported Canadian cities.
//!
//! The registry is the single source of truth for which cities the widget
//! understands and what base UTC offset each one uses. It never changes at
//! runtime, and every lookup preserves the declaration order below.

/// A supported city and its base offset from UTC in hours.
///
/// Offsets are standard-time offsets; the daylight-saving adjustment is
/// applied by the clock, not stored here. One entry uses a half-hour
/// fraction (St. John's, UTC−3:30).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub name: &'static str,
    pub utc_offset_hours: f64,
}

/// City used when the caller supplies no name at all.
pub const DEFAULT_LOCATION: &str = "Toronto";

/// All supported cities, in display order.
pub static CANADIAN_LOCATIONS: [Location; 10] = [
    Location { name: "Toronto", utc_offset_hours: -5.0 },
    Location { name: "Montreal", utc_offset_hours: -5.0 },
    Location { name: "Vancouver", utc_offset_hours: -8.0 },
    Location { name: "Calgary", utc_offset_hours: -7.0 },
    Location { name: "Edmonton", utc_offset_hours: -7.0 },
    Location { name: "Ottawa", utc_offset_hours: -5.0 },
    Location { name: "Winnipeg", utc_offset_hours: -6.0 },
    Location { name: "Quebec City", utc_offset_hours: -5.0 },
    Location { name: "Halifax", utc_offset_hours: -4.0 },
    Location { name: "St. John's", utc_offset_hours: -3.5 },
];

/// Exact, case-sensitive lookup by city name.
pub fn find_by_name(name: &str) -> Option<&'static Location> {
    CANADIAN_LOCATIONS.iter().find(|loc| loc.name == name)
}

/// Case-insensitive prefix match, in registry order. No fuzzy matching,
/// no ranking. An empty prefix matches every entry; whether anything is
/// shown for it is the caller's concern.
pub fn filter_by_prefix(text: &str) -> Vec<&'static Location> {
    let needle = text.to_lowercase();
    CANADIAN_LOCATIONS
        .iter()
        .filter(|loc| loc.name.to_lowercase().starts_with(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_offsets_are_exact() {
        let expected = [
            ("Toronto", -5.0),
            ("Montreal", -5.0),
            ("Vancouver", -8.0),
            ("Calgary", -7.0),
            ("Edmonton", -7.0),
            ("Ottawa", -5.0),
            ("Winnipeg", -6.0),
            ("Quebec City", -5.0),
            ("Halifax", -4.0),
            ("St. John's", -3.5),
        ];

        for (name, offset) in expected {
            let loc = find_by_name(name).expect("registered city must resolve");
            assert_eq!(loc.utc_offset_hours, offset, "offset mismatch for {name}");
        }
    }

    #[test]
    fn find_by_name_is_case_sensitive() {
        assert!(find_by_name("Toronto").is_some());
        assert!(find_by_name("toronto").is_none());
        assert!(find_by_name("Atlantis").is_none());
    }

    #[test]
    fn prefix_filter_is_case_insensitive() {
        let matches = filter_by_prefix("ca");
        let names: Vec<&str> = matches.iter().map(|loc| loc.name).collect();
        assert_eq!(names, ["Calgary"]);

        let matches = filter_by_prefix("CA");
        let names: Vec<&str> = matches.iter().map(|loc| loc.name).collect();
        assert_eq!(names, ["Calgary"]);
    }

    #[test]
    fn prefix_filter_preserves_registry_order() {
        // Empty prefix matches everything, so the result must be the
        // registry itself, in order.
        let names: Vec<&str> = filter_by_prefix("").iter().map(|loc| loc.name).collect();
        let registry: Vec<&str> = CANADIAN_LOCATIONS.iter().map(|loc| loc.name).collect();
        assert_eq!(names, registry);
    }

    #[test]
    fn prefix_filter_without_match_is_empty() {
        assert!(filter_by_prefix("z").is_empty());
    }
}
