//! Mapping from WMO weather codes (as reported by Open-Meteo) to short descriptions.

const CONDITIONS: &[(&[i32], &str)] = &[
    (&[0], "clear sky"),
    (&[1, 2, 3], "partly cloudy"),
    (&[45, 48], "fog"),
    (&[51, 53, 55], "drizzle"),
    (&[61, 63, 65], "rain"),
    (&[71, 73, 75], "snow"),
    (&[80, 81, 82], "rain showers"),
    (&[95, 96, 99], "thunderstorm"),
];

pub const UNKNOWN: &str = "unknown";

/// Describe a weather code. Codes outside the table map to `"unknown"`.
pub fn describe(code: i32) -> &'static str {
    CONDITIONS
        .iter()
        .find(|(codes, _)| codes.contains(&code))
        .map(|(_, description)| *description)
        .unwrap_or(UNKNOWN)
}
