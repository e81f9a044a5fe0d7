//! PE spending limit per turn, by NEX band

/// Highest per-turn limit reachable at very high NEX
pub const MAX_PE_LIMIT: u32 = 20;

/// Maximum PE a character may spend in a single turn at this NEX
///
/// 0-9 -> 1, 10-19 -> 2, 20-29 -> 3, ... 80-89 -> 9;
/// from 90 on the limit is `clamp(floor((nex - 5) / 5) + 1, 1, 20)`.
pub fn pe_limit_for_nex(nex: u32) -> u32 {
    match nex {
        0..=9 => 1,
        10..=19 => 2,
        20..=29 => 3,
        30..=39 => 4,
        40..=49 => 5,
        50..=59 => 6,
        60..=69 => 7,
        70..=79 => 8,
        80..=89 => 9,
        _ => ((nex - 5) / 5 + 1).clamp(1, MAX_PE_LIMIT),
    }
}

/// Whether spending `cost` keeps this turn's total within `limit`
pub fn can_spend(cost: u32, spent_this_turn: u32, limit: u32) -> bool {
    spent_this_turn.saturating_add(cost) <= limit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_bands() {
        assert_eq!(pe_limit_for_nex(0), 1);
        assert_eq!(pe_limit_for_nex(4), 1);
        assert_eq!(pe_limit_for_nex(5), 1);
        assert_eq!(pe_limit_for_nex(9), 1);
        assert_eq!(pe_limit_for_nex(10), 2);
        assert_eq!(pe_limit_for_nex(24), 3);
        assert_eq!(pe_limit_for_nex(55), 6);
        assert_eq!(pe_limit_for_nex(89), 9);
    }

    #[test]
    fn test_top_band_formula() {
        // floor(85 / 5) + 1
        assert_eq!(pe_limit_for_nex(90), 18);
        assert_eq!(pe_limit_for_nex(99), 19);
        assert_eq!(pe_limit_for_nex(200), MAX_PE_LIMIT);
    }

    #[test]
    fn test_can_spend() {
        let limit = pe_limit_for_nex(24);
        assert!(can_spend(2, 1, limit));
        assert!(!can_spend(2, 2, limit));
        assert!(can_spend(0, 3, limit));
        assert!(!can_spend(u32::MAX, 1, limit));
    }
}
