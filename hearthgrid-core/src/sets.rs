use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Canonical key of the base set, which never rotates out.
pub const CORE_SET: &str = "CORE";

/// Rotation window length. Sets released within this many months stay in.
pub const ROTATION_MONTHS: u32 = 24;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SetInfo {
    pub key: String,
    pub order: i32,
    /// Release date as "Month D, YYYY", or empty for evergreen sets.
    pub date: String,
    pub is_mini_set: bool,
    pub api_name: Option<String>,
}

impl SetInfo {
    pub fn new(key: &str, order: i32, date: &str, is_mini_set: bool, api_name: Option<&str>) -> Self {
        Self {
            key: key.to_string(),
            order,
            date: date.to_string(),
            is_mini_set,
            api_name: api_name.map(str::to_string),
        }
    }

    pub fn release_date(&self) -> Option<NaiveDate> {
        parse_release_date(&self.date)
    }
}

// (key, order, release date, mini-set, api name)
const STANDARD_SETS: &[(&str, i32, &str, bool, &str)] = &[
    ("HEROES_OF_STARCRAFT", 43, "January 31, 2025", true, "HEROES_OF_STARCRAFT"),
    ("THE_GREAT_DARK_BEYOND", 42, "November 5, 2024", false, "GREAT_DARK_BEYOND"),
    ("THE_TRAVELING_TRAVEL_AGENCY", 41, "September 10, 2024", true, "TRAVELING_TRAVEL_AGENCY"),
    ("PERILS_IN_PARADISE", 40, "July 23, 2024", false, "PERILS_IN_PARADISE"),
    ("DR_BOOMS_INCREDIBLE_INVENTIONS", 39, "May 14, 2024", true, "BOOMS_INVENTIONS"),
    ("WHIZBANGS_WORKSHOP", 38, "March 19, 2024", false, "WHIZBANGS_WORKSHOP"),
    ("DELVE_INTO_DEEPHOLM", 37, "January 18, 2024", true, "DELVE_INTO_DEEPHOLM"),
    ("SHOWDOWN_IN_THE_BADLANDS", 36, "November 14, 2023", false, "BADLANDS"),
    ("FALL_OF_ULDUAR", 35, "September 19, 2023", true, "FALL_OF_ULDUAR"),
    ("TITANS", 34, "August 1, 2023", false, "TITANS"),
    ("AUDIOPOCALYPSE", 33, "May 31, 2023", true, "AUDIOPOCALYPSE"),
    ("FESTIVAL_OF_LEGENDS", 32, "April 11, 2023", false, "FESTIVAL"),
    ("RETURN_TO_NAXXRAMAS", 31, "February 14, 2023", true, "RETURN_TO_NAXXRAMAS"),
    ("MARCH_OF_THE_LICH_KING", 30, "December 6, 2022", false, "RETURN_OF_THE_LICH_KING"),
    ("MAW_AND_DISORDER", 29, "September 27, 2022", true, "MAW_AND_DISORDER"),
    ("MURDER_AT_CASTLE_NATHRIA", 28, "August 2, 2022", false, "MURDER_AT_CASTLE_NATHRIA"),
    ("THRONE_OF_THE_TIDES", 27, "June 1, 2022", true, "THRONE_OF_THE_TIDES"),
    ("VOYAGE_TO_THE_SUNKEN_CITY", 26, "April 12, 2022", false, "VOYAGE_TO_THE_SUNKEN_CITY"),
    ("ONYXIAS_LAIR", 25, "February 15, 2022", true, "ONYXIAS_LAIR"),
    ("FRACTURED_IN_ALTERAC_VALLEY", 24, "December 7, 2021", false, "ALTERAC_VALLEY"),
    ("DEADMINES", 23, "November 2, 2021", true, "DEADMINES"),
    ("UNITED_IN_STORMWIND", 22, "August 3, 2021", false, "STORMWIND"),
    ("WAILING_CAVERNS", 21, "June 3, 2021", true, "WAILING_CAVERNS"),
    ("FORGED_IN_THE_BARRENS", 20, "March 30, 2021", false, "THE_BARRENS"),
    ("DARKMOON_RACES", 19, "January 21, 2021", true, "DARKMOON_RACES"),
    ("MADNESS_AT_THE_DARKMOON_FAIRE", 18, "November 17, 2020", false, "DARKMOON_FAIRE"),
    ("SCHOLOMANCE_ACADEMY", 17, "August 6, 2020", false, "SCHOLOMANCE"),
    ("ASHES_OF_OUTLAND", 16, "April 7, 2020", false, "BLACK_TEMPLE"),
    ("DESCENT_OF_DRAGONS", 15, "December 10, 2019", false, "DRAGONS"),
    ("SAVIORS_OF_ULDUM", 14, "August 6, 2019", false, "ULDUM"),
    ("RISE_OF_SHADOWS", 13, "April 9, 2019", false, "DALARAN"),
    ("RASTAKHANS_RUMBLE", 12, "December 4, 2018", false, "TROLL"),
    ("THE_BOOMSDAY_PROJECT", 11, "August 7, 2018", false, "BOOMSDAY"),
    ("THE_WITCHWOOD", 10, "April 12, 2018", false, "GILNEAS"),
    ("KOBOLDS_AND_CATACOMBS", 9, "December 7, 2017", false, "LOOTAPALOOZA"),
    ("KNIGHTS_OF_THE_FROZEN_THRONE", 8, "August 10, 2017", false, "ICCA"),
    ("JOURNEY_TO_UNGORO", 7, "April 6, 2017", false, "UNGORO"),
    ("MEAN_STREETS_OF_GADGETZAN", 6, "December 1, 2016", false, "GANGS"),
    ("WHISPERS_OF_THE_OLD_GODS", 5, "April 26, 2016", false, "OG"),
    ("THE_GRAND_TOURNAMENT", 4, "August 24, 2015", false, "TGT"),
    ("GOBLINS_VS_GNOMES", 3, "December 8, 2014", false, "GVG"),
    ("CORE", 2, "", false, "CORE"),
    ("LEGACY", 1, "", false, "LEGACY"),
    ("VANILLA", 0, "", false, "VANILLA"),
];

/// Static expansion metadata, in table order.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SetTable {
    entries: Vec<SetInfo>,
}

impl SetTable {
    pub fn new(entries: Vec<SetInfo>) -> Self {
        Self { entries }
    }

    /// The built-in table of every released expansion and mini-set.
    pub fn standard() -> Self {
        Self::new(
            STANDARD_SETS
                .iter()
                .map(|(key, order, date, mini, api)| SetInfo::new(key, *order, date, *mini, Some(api)))
                .collect(),
        )
    }

    pub fn entries(&self) -> &[SetInfo] {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<&SetInfo> {
        self.entries.iter().find(|s| s.key == key)
    }

    pub fn api_name(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|s| s.api_name.as_deref())
    }

    /// Reverse lookup from an API set name to its canonical key. The first
    /// entry wins if the table maps one API name twice.
    pub fn key_for_api_name(&self, api_name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|s| s.api_name.as_deref() == Some(api_name))
            .map(|s| s.key.as_str())
    }

    /// Canonical keys, most recent release first.
    pub fn newest_first(&self) -> Vec<&str> {
        let mut v: Vec<&SetInfo> = self.entries.iter().collect();
        v.sort_by(|a, b| b.order.cmp(&a.order));
        v.into_iter().map(|s| s.key.as_str()).collect()
    }

    /// Whether the set identified by `key` is in the current rotation as of
    /// `today`. The base set is always in; otherwise the release date must
    /// fall on or after `today` minus the rotation window.
    pub fn is_in_rotation(&self, key: &str, today: NaiveDate) -> bool {
        if key == CORE_SET {
            return true;
        }
        let Some(released) = self.get(key).and_then(SetInfo::release_date) else {
            return false;
        };
        match today.checked_sub_months(Months::new(ROTATION_MONTHS)) {
            Some(cutoff) => released >= cutoff,
            None => true,
        }
    }

    /// Display name for a canonical key, e.g. `JOURNEY_TO_UNGORO` becomes
    /// "Journey To Un'Goro".
    pub fn format_name(&self, key: &str) -> String {
        let name = key
            .split('_')
            .map(|word| match word {
                "VS" => "vs".to_string(),
                "UNGORO" => "Un'Goro".to_string(),
                w => title_case(w),
            })
            .collect::<Vec<_>>()
            .join(" ");
        if self.get(key).map(|s| s.is_mini_set).unwrap_or(false) {
            format!("{name} (Mini-set)")
        } else {
            name
        }
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_string() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

pub fn parse_release_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(s, "%B %d, %Y").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn standard_table_is_consistent() {
        let t = SetTable::standard();
        assert_eq!(t.entries().len(), 44);
        for s in t.entries() {
            let api = s.api_name.as_deref().unwrap();
            assert_eq!(t.key_for_api_name(api), Some(s.key.as_str()));
            if !s.date.is_empty() {
                assert!(s.release_date().is_some(), "bad date for {}", s.key);
            }
        }
    }

    #[test]
    fn parses_single_digit_days() {
        assert_eq!(parse_release_date("November 5, 2024"), Some(d(2024, 11, 5)));
        assert_eq!(parse_release_date(""), None);
        assert_eq!(parse_release_date("soon"), None);
    }

    #[test]
    fn newest_first_ordering() {
        let t = SetTable::standard();
        let keys = t.newest_first();
        assert_eq!(keys.first(), Some(&"HEROES_OF_STARCRAFT"));
        assert_eq!(keys.last(), Some(&"VANILLA"));
    }

    #[test]
    fn formats_names() {
        let t = SetTable::standard();
        assert_eq!(t.format_name("GOBLINS_VS_GNOMES"), "Goblins vs Gnomes");
        assert_eq!(t.format_name("JOURNEY_TO_UNGORO"), "Journey To Un'Goro");
        assert_eq!(t.format_name("DEADMINES"), "Deadmines (Mini-set)");
        assert_eq!(t.format_name("NOT_IN_TABLE"), "Not In Table");
    }

    #[test]
    fn rotation_window_bounds() {
        let t = SetTable::new(vec![
            SetInfo::new("INSIDE", 3, "October 16, 2024", false, Some("IN")),
            SetInfo::new("EDGE", 2, "October 15, 2024", false, Some("EDGE")),
            SetInfo::new("OUTSIDE", 1, "October 14, 2024", false, Some("OUT")),
            SetInfo::new("EVERGREEN", 0, "", false, Some("EVER")),
        ]);
        let today = d(2026, 10, 15);
        assert!(t.is_in_rotation("INSIDE", today));
        assert!(t.is_in_rotation("EDGE", today));
        assert!(!t.is_in_rotation("OUTSIDE", today));
        assert!(!t.is_in_rotation("EVERGREEN", today));
        assert!(!t.is_in_rotation("MISSING", today));
        assert!(t.is_in_rotation(CORE_SET, today));
    }
}
