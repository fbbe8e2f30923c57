// ── Field validators ──
//
// Pure predicates over operator-entered text. These never block typing;
// the wizard only consults them when gating step advancement.

/// True iff `s` is six groups of exactly two hex digits with `:` or `-`
/// at each of the five separator slots.
///
/// Each separator slot matches independently, so mixed separators
/// (`aa:bb-cc:dd:ee:ff`) are accepted -- the same strings the pattern
/// `([0-9A-Fa-f]{2}[:-]){5}[0-9A-Fa-f]{2}` accepts.
pub fn is_valid_mac(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 17 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, &b)| {
        if i % 3 == 2 {
            b == b':' || b == b'-'
        } else {
            b.is_ascii_hexdigit()
        }
    })
}

/// True iff `s` (surrounding whitespace ignored) parses as a base-10
/// integer in the valid VLAN range [1, 4094].
pub fn is_valid_vlan(s: &str) -> bool {
    s.trim()
        .parse::<u16>()
        .is_ok_and(|v| (1..=4094).contains(&v))
}

/// Canonical draft form of a MAC address: trimmed and lowercased.
pub fn canonical_mac(s: &str) -> String {
    s.trim().to_ascii_lowercase()
}
