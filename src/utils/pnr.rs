use rand::Rng;

const PNR_PREFIX: &str = "PNR";
const PNR_SPAN: u32 = 10_000_000;

/// Format a numeric suffix as a PNR token: "PNR" plus 7 zero-padded digits.
pub fn format_pnr(suffix: u32) -> String {
    format!("{}{:07}", PNR_PREFIX, suffix % PNR_SPAN)
}

/// Generate a random PNR token. Tokens are not guaranteed unique; callers
/// must check the booking index and retry on collision.
pub fn generate_pnr() -> String {
    format_pnr(rand::thread_rng().gen_range(0..PNR_SPAN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_zero_pads_to_seven_digits() {
        assert_eq!(format_pnr(0), "PNR0000000");
        assert_eq!(format_pnr(42), "PNR0000042");
        assert_eq!(format_pnr(9_999_999), "PNR9999999");
    }

    #[test]
    fn test_format_wraps_large_suffixes() {
        assert_eq!(format_pnr(10_000_000), "PNR0000000");
        assert_eq!(format_pnr(12_345_678), "PNR2345678");
    }

    #[test]
    fn test_generated_tokens_match_contract() {
        for _ in 0..100 {
            let pnr = generate_pnr();
            assert_eq!(pnr.len(), 10);
            assert!(pnr.starts_with("PNR"));
            assert!(pnr[3..].chars().all(|c| c.is_ascii_digit()));
        }
    }
}
