use crate::types::{TypesError, U256};
use crate::ProtocolResult;

/// Whether an optional numeric or address field counts as unset.
///
/// `None`, `"0"`, `"0x"` and `"0x0"` (any case) are empty. Everything else,
/// `"0x1"` and `"00"` included, is a caller supplied value.
pub fn is_empty_value(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(v) => v == "0" || v.eq_ignore_ascii_case("0x") || v.eq_ignore_ascii_case("0x0"),
    }
}

/// Parse a quantity written either in base 10 or as a `0x` prefixed hex
/// string.
pub fn parse_u64_quantity(s: &str) -> ProtocolResult<u64> {
    let trimmed = s.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => trimmed.parse::<u64>(),
    };

    parsed.map_err(|_| TypesError::InvalidQuantity(s.to_owned()).into())
}

/// Lower case hex digits without the `0x` prefix, e.g. `10000` -> `"2710"`.
pub fn to_unprefixed_hex(value: U256) -> String {
    format!("{:x}", value)
}
