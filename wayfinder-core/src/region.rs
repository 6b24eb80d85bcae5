//! Region codes: continent lookup and display names qualified by country.

/// Broad continental bucket for a country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Continent {
    /// Africa.
    Africa,
    /// Antarctica and the subantarctic territories.
    Antarctica,
    /// Asia, including the Middle East and Central Asia.
    Asia,
    /// Europe.
    Europe,
    /// North, Central and South America with the Caribbean.
    America,
    /// Oceania.
    Oceania,
}

impl Continent {
    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Africa => "Africa",
            Self::Antarctica => "Antarctica",
            Self::Asia => "Asia",
            Self::Europe => "Europe",
            Self::America => "America",
            Self::Oceania => "Oceania",
        }
    }
}

impl std::fmt::Display for Continent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Country part of a region code: everything before the first `-`, trimmed.
fn country_code(region: &str) -> &str {
    let trimmed = region.trim();
    trimmed
        .split_once('-')
        .map_or(trimmed, |(country, _)| country)
        .trim()
}

/// Look up the continent of an ISO 3166-1 alpha-2 region code.
///
/// Matching is case-insensitive. Subdivision codes such as `US-CA` resolve
/// by their country part. Unknown codes yield `None`.
///
/// # Examples
/// ```
/// use wayfinder_core::{Continent, continent_for_region};
///
/// assert_eq!(continent_for_region("fr"), Some(Continent::Europe));
/// assert_eq!(continent_for_region("US-CA"), Some(Continent::America));
/// assert_eq!(continent_for_region("XX"), None);
/// ```
#[must_use]
pub fn continent_for_region(code: &str) -> Option<Continent> {
    let country = country_code(code).to_ascii_uppercase();
    let continent = match country.as_str() {
        "US" | "CA" | "MX" | "BZ" | "GT" | "SV" | "HN" | "NI" | "CR" | "PA" | "AG" | "AI"
        | "AW" | "BB" | "BL" | "BQ" | "BS" | "CU" | "CW" | "DM" | "DO" | "GD" | "GP" | "HT"
        | "JM" | "KN" | "KY" | "LC" | "MF" | "MQ" | "MS" | "SX" | "TC" | "TT" | "VC" | "VG"
        | "VI" | "PR" | "BM" | "GL" | "PM" | "AR" | "BO" | "BR" | "CL" | "CO" | "EC" | "FK"
        | "GF" | "GY" | "PE" | "PY" | "SR" | "UY" | "VE" => Continent::America,
        "AQ" | "BV" | "GS" | "HM" | "TF" => Continent::Antarctica,
        "AD" | "AL" | "AT" | "AX" | "BA" | "BE" | "BG" | "BY" | "CH" | "CY" | "CZ" | "DE"
        | "DK" | "EE" | "ES" | "FI" | "FO" | "FR" | "GB" | "GG" | "GI" | "GR" | "HR" | "HU"
        | "IE" | "IM" | "IS" | "IT" | "JE" | "LI" | "LT" | "LU" | "LV" | "MC" | "MD" | "ME"
        | "MK" | "MT" | "NL" | "NO" | "PL" | "PT" | "RO" | "RS" | "RU" | "SE" | "SI" | "SJ"
        | "SK" | "SM" | "UA" | "VA" => Continent::Europe,
        "AE" | "AF" | "AM" | "AZ" | "BD" | "BH" | "BN" | "BT" | "CN" | "GE" | "HK" | "ID"
        | "IL" | "IN" | "IQ" | "IR" | "JO" | "JP" | "KG" | "KH" | "KP" | "KR" | "KW" | "KZ"
        | "LA" | "LB" | "LK" | "MM" | "MN" | "MO" | "MV" | "MY" | "NP" | "OM" | "PH" | "PK"
        | "PS" | "QA" | "SA" | "SG" | "SY" | "TH" | "TJ" | "TL" | "TM" | "TR" | "TW" | "UZ"
        | "VN" | "YE" => Continent::Asia,
        "AO" | "BF" | "BI" | "BJ" | "BW" | "CD" | "CF" | "CG" | "CI" | "CM" | "CV" | "DJ"
        | "DZ" | "EG" | "EH" | "ER" | "ET" | "GA" | "GH" | "GM" | "GN" | "GQ" | "GW" | "KE"
        | "KM" | "LR" | "LS" | "LY" | "MA" | "MG" | "ML" | "MR" | "MU" | "MW" | "MZ" | "NA"
        | "NE" | "NG" | "RE" | "RW" | "SC" | "SD" | "SH" | "SL" | "SN" | "SO" | "SS" | "ST"
        | "SZ" | "TD" | "TG" | "TN" | "TZ" | "UG" | "YT" | "ZA" | "ZM" | "ZW" => Continent::Africa,
        "AS" | "AU" | "CK" | "FJ" | "FM" | "GU" | "KI" | "MH" | "MP" | "NC" | "NF" | "NR"
        | "NU" | "NZ" | "PF" | "PG" | "PN" | "PW" | "SB" | "TK" | "TO" | "TV" | "UM" | "VU"
        | "WF" | "WS" => Continent::Oceania,
        _ => return None,
    };
    Some(continent)
}

/// Qualify `base` with the country part of `region` as `"Base, CC"`.
///
/// A blank base yields an empty string. Without a usable region code the
/// trimmed base is returned unchanged.
///
/// # Examples
/// ```
/// use wayfinder_core::standardized_name;
///
/// assert_eq!(standardized_name(" Golden Gate ", Some("US-CA")), "Golden Gate, US");
/// assert_eq!(standardized_name("Colosseum", None), "Colosseum");
/// assert_eq!(standardized_name("  ", Some("IT")), "");
/// ```
#[must_use]
pub fn standardized_name(base: &str, region: Option<&str>) -> String {
    let trimmed = base.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match region.map(country_code).filter(|code| !code.is_empty()) {
        Some(code) => format!("{trimmed}, {code}"),
        None => trimmed.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("US", Some(Continent::America))]
    #[case("br", Some(Continent::America))]
    #[case("AQ", Some(Continent::Antarctica))]
    #[case("GB", Some(Continent::Europe))]
    #[case("JP", Some(Continent::Asia))]
    #[case("TR", Some(Continent::Asia))]
    #[case("EG", Some(Continent::Africa))]
    #[case("NZ", Some(Continent::Oceania))]
    #[case("ES-CT", Some(Continent::Europe))]
    #[case(" au ", Some(Continent::Oceania))]
    #[case("ZZ", None)]
    #[case("", None)]
    fn looks_up_continents(#[case] code: &str, #[case] expected: Option<Continent>) {
        assert_eq!(continent_for_region(code), expected);
    }

    #[rstest]
    #[case("Sagrada Família", Some("ES-CT"), "Sagrada Família, ES")]
    #[case("Louvre", Some("FR"), "Louvre, FR")]
    #[case("Louvre", Some("  "), "Louvre")]
    #[case("Louvre", Some("-CT"), "Louvre")]
    #[case("\tLouvre\n", None, "Louvre")]
    #[case("", Some("FR"), "")]
    fn standardizes_names(
        #[case] base: &str,
        #[case] region: Option<&str>,
        #[case] expected: &str,
    ) {
        assert_eq!(standardized_name(base, region), expected);
    }

    #[rstest]
    fn continent_names_display() {
        assert_eq!(Continent::America.to_string(), "America");
        assert_eq!(Continent::Antarctica.name(), "Antarctica");
    }
}
