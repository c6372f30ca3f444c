/// Countries TradingView shows by default, in the order it sends them
pub const DEFAULT_COUNTRY_CODES: [&str; 15] = [
    "US", "EU", "IT", "NZ", "CH", "AU", "FR", "JP", "ZA", "TR", "CA", "DE", "MX", "ES", "GB",
];

/// Every country/region code the endpoint is known to accept.
///
/// Reference only: codes outside this list are still sent as given.
pub const SUPPORTED_COUNTRY_CODES: [&str; 83] = [
    "AE", "AO", "AR", "AT", "AU", "BD", "BE", "BH", "BR", "BW", "CA", "CH", "CL", "CN", "CO", "CY",
    "CZ", "DE", "DK", "EE", "EG", "ES", "ET", "EU", "FI", "FR", "GB", "GR", "HK", "HU", "ID", "IE",
    "IL", "IN", "IS", "IT", "JP", "KE", "KR", "KW", "LK", "LT", "LV", "MA", "MU", "MW", "MX", "MY",
    "MZ", "NA", "NG", "NL", "NO", "NZ", "OM", "PE", "PH", "PK", "PL", "PT", "QA", "RO", "RS", "RU",
    "RW", "SA", "SC", "SE", "SG", "SK", "TH", "TN", "TR", "TW", "TZ", "UA", "UG", "US", "VE", "VN",
    "ZA", "ZM", "ZW",
];

/// Return the requested codes, or the default list when none were given
pub fn build_country_filter(codes: Option<&[String]>) -> Vec<String> {
    match codes {
        Some(codes) if !codes.is_empty() => codes.to_vec(),
        _ => DEFAULT_COUNTRY_CODES.iter().map(|c| c.to_string()).collect(),
    }
}

/// Check a code against the supported reference list
pub fn is_supported_country(code: &str) -> bool {
    SUPPORTED_COUNTRY_CODES.contains(&code)
}

/// Codes from `codes` that are not in the supported reference list
pub fn unsupported_countries(codes: &[String]) -> Vec<&str> {
    codes
        .iter()
        .map(String::as_str)
        .filter(|code| !is_supported_country(code))
        .collect()
}
