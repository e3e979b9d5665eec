/// Dialing prefixes offered next to the phone number, in display order.
pub const COUNTRY_CODES: &[(&str, &str)] = &[
    ("+91", "India"),
    ("+1", "USA, Canada"),
    ("+44", "United Kingdom"),
    ("+61", "Australia"),
    ("+81", "Japan"),
    ("+33", "France"),
    ("+49", "Germany"),
    ("+39", "Italy"),
    ("+34", "Spain"),
    ("+55", "Brazil"),
    ("+27", "South Africa"),
    ("+7", "Russia, Kazakhstan"),
    ("+20", "Egypt"),
    ("+52", "Mexico"),
    ("+86", "China"),
];

/// Display label, e.g. `+44 (United Kingdom)`.
pub fn label(code: &str) -> Option<String> {
    COUNTRY_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(c, name)| format!("{c} ({name})"))
}
