// 🏦 Bank Entity - BIN ranges + issuer lookup
//
// A BIN (Bank Identification Number) is the 6-digit prefix of a card number.
// Each bank owns one or more inclusive [low, high] ranges of BINs.
//
// Lookup is FIRST-MATCH in table order, not best-match:
// - overlapping ranges are allowed
// - the earlier line in banks.txt wins

/// Returned when no range contains the BIN
pub const UNKNOWN_BANK: &str = "Unknown bank";

/// Number of leading characters that make up a BIN
pub const BIN_LEN: usize = 6;

// ============================================================================
// BANK RANGE
// ============================================================================

/// One record of banks.txt: `<name>,<low>,<high>`
///
/// Bounds are 64-bit so any integer the file holds loads as written,
/// negative or wider than 6 digits. Such ranges simply never match a BIN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankRange {
    /// Issuing bank name, taken verbatim from the file
    pub name: String,

    /// Lowest BIN in the range (inclusive)
    pub low: i64,

    /// Highest BIN in the range (inclusive)
    pub high: i64,
}

impl BankRange {
    pub fn new(name: impl Into<String>, low: i64, high: i64) -> Self {
        BankRange {
            name: name.into(),
            low,
            high,
        }
    }

    /// Check if a BIN falls inside this range (both ends inclusive)
    pub fn contains(&self, bin: i64) -> bool {
        self.low <= bin && bin <= self.high
    }

    /// Check if two ranges share at least one BIN
    pub fn overlaps(&self, other: &BankRange) -> bool {
        self.low <= other.high && other.low <= self.high
    }
}

// ============================================================================
// BIN EXTRACTION
// ============================================================================

/// Take the first 6 characters of a card number as an integer BIN.
///
/// `None` is the invalid-BIN sentinel: the input is shorter than 6 characters
/// or its prefix isn't numeric. It never matches a range.
pub fn extract_bin(card_number: &str) -> Option<i64> {
    let prefix = card_number.get(..BIN_LEN)?;
    if !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    prefix.parse().ok()
}

// ============================================================================
// BIN TABLE
// ============================================================================

/// Ordered, read-only collection of BIN ranges
///
/// Built once at startup (see `loader`) and shared by reference afterwards.
/// Insertion order is file order and lookups depend on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinTable {
    ranges: Vec<BankRange>,
}

impl BinTable {
    pub fn new(ranges: Vec<BankRange>) -> Self {
        BinTable { ranges }
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn ranges(&self) -> &[BankRange] {
        &self.ranges
    }

    /// Linear scan, first range containing the BIN wins
    pub fn find(&self, bin: i64) -> Option<&BankRange> {
        self.ranges.iter().find(|range| range.contains(bin))
    }

    /// Bank name for a BIN, or `UNKNOWN_BANK`
    pub fn identify(&self, bin: i64) -> &str {
        self.find(bin)
            .map(|range| range.name.as_str())
            .unwrap_or(UNKNOWN_BANK)
    }

    /// Extract the BIN from a card number and resolve it
    pub fn identify_card(&self, card_number: &str) -> &str {
        match extract_bin(card_number) {
            Some(bin) => self.identify(bin),
            None => UNKNOWN_BANK,
        }
    }

    /// Index pairs `(earlier, later)` of ranges that share BINs.
    ///
    /// For any BIN in the shared part, the later range is unreachable.
    pub fn overlaps(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for (i, a) in self.ranges.iter().enumerate() {
            for (j, b) in self.ranges.iter().enumerate().skip(i + 1) {
                if a.overlaps(b) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }
}

impl FromIterator<BankRange> for BinTable {
    fn from_iter<I: IntoIterator<Item = BankRange>>(iter: I) -> Self {
        BinTable::new(iter.into_iter().collect())
    }
}

// ============================================================================
// TESTS
// ============================================================================
