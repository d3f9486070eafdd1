/// Power-of-ten exponents and their prefix symbols, largest exponent first.
///
/// The last tier carries the smallest exponent and is where the nearest-tier
/// search starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixTable {
    tiers: &'static [(i32, &'static str)],
}

pub static GRAM_PREFIXES: PrefixTable = PrefixTable::new(&[
    (3, "K"),
    (0, ""),
    (-3, "m"),
    (-6, "µ"),
    (-9, "n"),
    (-12, "p"),
]);

pub static METER_PREFIXES: PrefixTable = PrefixTable::new(&[
    (3, "K"),
    (0, ""),
    (-2, "c"),
    (-3, "m"),
    (-6, "µ"),
    (-9, "n"),
    (-12, "p"),
]);

impl PrefixTable {
    const fn new(tiers: &'static [(i32, &'static str)]) -> Self {
        Self { tiers }
    }

    pub fn prefix(&self, exp: i32) -> Option<&'static str> {
        self.tiers.iter().find(|(tier, _)| *tier == exp).map(|(_, symbol)| *symbol)
    }

    /// Pick the tier a value of magnitude `10^search` is rendered at.
    ///
    /// Scanning from the largest exponent, the first tier that `search` reaches
    /// wins. When `search` is below every tier, the tier closest to it wins;
    /// on equal distance the earlier candidate is kept.
    pub fn nearest(&self, search: i32) -> (i32, &'static str) {
        let Some((anchor, candidates)) = self.tiers.split_last() else {
            return (0, "");
        };

        let mut closest = *anchor;
        for &tier in candidates {
            if search >= tier.0 {
                return tier;
            }
            if search.abs_diff(closest.0) > search.abs_diff(tier.0) {
                closest = tier;
            }
        }

        closest
    }
}
