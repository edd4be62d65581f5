// Static destination roster. The comparison site only covers countries we
// have provider URLs for, so this is a fixed table rather than a lookup
// service.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Country {
    pub name: &'static str,
    pub code: &'static str,
    pub flag: &'static str,
}

pub const COUNTRIES: &[Country] = &[
    Country { name: "United States", code: "US", flag: "\u{1F1FA}\u{1F1F8}" },
    Country { name: "United Kingdom", code: "GB", flag: "\u{1F1EC}\u{1F1E7}" },
    Country { name: "Canada", code: "CA", flag: "\u{1F1E8}\u{1F1E6}" },
    Country { name: "Australia", code: "AU", flag: "\u{1F1E6}\u{1F1FA}" },
    Country { name: "Germany", code: "DE", flag: "\u{1F1E9}\u{1F1EA}" },
    Country { name: "France", code: "FR", flag: "\u{1F1EB}\u{1F1F7}" },
    Country { name: "Italy", code: "IT", flag: "\u{1F1EE}\u{1F1F9}" },
    Country { name: "Spain", code: "ES", flag: "\u{1F1EA}\u{1F1F8}" },
    Country { name: "Japan", code: "JP", flag: "\u{1F1EF}\u{1F1F5}" },
    Country { name: "South Korea", code: "KR", flag: "\u{1F1F0}\u{1F1F7}" },
    Country { name: "China", code: "CN", flag: "\u{1F1E8}\u{1F1F3}" },
    Country { name: "India", code: "IN", flag: "\u{1F1EE}\u{1F1F3}" },
    Country { name: "Brazil", code: "BR", flag: "\u{1F1E7}\u{1F1F7}" },
    Country { name: "Mexico", code: "MX", flag: "\u{1F1F2}\u{1F1FD}" },
    Country { name: "Argentina", code: "AR", flag: "\u{1F1E6}\u{1F1F7}" },
    Country { name: "Chile", code: "CL", flag: "\u{1F1E8}\u{1F1F1}" },
    Country { name: "Thailand", code: "TH", flag: "\u{1F1F9}\u{1F1ED}" },
    Country { name: "Singapore", code: "SG", flag: "\u{1F1F8}\u{1F1EC}" },
    Country { name: "Malaysia", code: "MY", flag: "\u{1F1F2}\u{1F1FE}" },
    Country { name: "Indonesia", code: "ID", flag: "\u{1F1EE}\u{1F1E9}" },
    Country { name: "Philippines", code: "PH", flag: "\u{1F1F5}\u{1F1ED}" },
    Country { name: "Vietnam", code: "VN", flag: "\u{1F1FB}\u{1F1F3}" },
    Country { name: "Turkey", code: "TR", flag: "\u{1F1F9}\u{1F1F7}" },
    Country { name: "United Arab Emirates", code: "AE", flag: "\u{1F1E6}\u{1F1EA}" },
    Country { name: "Saudi Arabia", code: "SA", flag: "\u{1F1F8}\u{1F1E6}" },
    Country { name: "South Africa", code: "ZA", flag: "\u{1F1FF}\u{1F1E6}" },
    Country { name: "Egypt", code: "EG", flag: "\u{1F1EA}\u{1F1EC}" },
    Country { name: "Morocco", code: "MA", flag: "\u{1F1F2}\u{1F1E6}" },
    Country { name: "Greece", code: "GR", flag: "\u{1F1EC}\u{1F1F7}" },
    Country { name: "Portugal", code: "PT", flag: "\u{1F1F5}\u{1F1F9}" },
    Country { name: "Netherlands", code: "NL", flag: "\u{1F1F3}\u{1F1F1}" },
    Country { name: "Belgium", code: "BE", flag: "\u{1F1E7}\u{1F1EA}" },
    Country { name: "Switzerland", code: "CH", flag: "\u{1F1E8}\u{1F1ED}" },
    Country { name: "Austria", code: "AT", flag: "\u{1F1E6}\u{1F1F9}" },
    Country { name: "Sweden", code: "SE", flag: "\u{1F1F8}\u{1F1EA}" },
    Country { name: "Norway", code: "NO", flag: "\u{1F1F3}\u{1F1F4}" },
    Country { name: "Denmark", code: "DK", flag: "\u{1F1E9}\u{1F1F0}" },
    Country { name: "Finland", code: "FI", flag: "\u{1F1EB}\u{1F1EE}" },
    Country { name: "Poland", code: "PL", flag: "\u{1F1F5}\u{1F1F1}" },
    Country { name: "Czech Republic", code: "CZ", flag: "\u{1F1E8}\u{1F1FF}" },
    Country { name: "Hungary", code: "HU", flag: "\u{1F1ED}\u{1F1FA}" },
    Country { name: "Romania", code: "RO", flag: "\u{1F1F7}\u{1F1F4}" },
    Country { name: "New Zealand", code: "NZ", flag: "\u{1F1F3}\u{1F1FF}" },
    Country { name: "Israel", code: "IL", flag: "\u{1F1EE}\u{1F1F1}" },
    Country { name: "Russia", code: "RU", flag: "\u{1F1F7}\u{1F1FA}" },
    Country { name: "Ukraine", code: "UA", flag: "\u{1F1FA}\u{1F1E6}" },
];

/// Case-insensitive substring search over name and code. A blank query
/// matches nothing rather than everything, mirroring the picker behavior.
pub fn search_countries(query: &str) -> Vec<Country> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    COUNTRIES
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&query) || c.code.to_lowercase().contains(&query)
        })
        .copied()
        .collect()
}
