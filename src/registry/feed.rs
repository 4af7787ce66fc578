//! Fixed-width Bundesbank BLZ file parsing.
//!
//! Record layout (1-based columns in the Bundesbank documentation, 0-based
//! character offsets here, one character per Latin-1 byte):
//!
//! | Offset | Field |
//! |--------|-------|
//! | `[0:8]` | Bankleitzahl |
//! | `[8]` | Merkmal (own BLZ / branch) |
//! | `[9:67]` | Bezeichnung |
//! | `[67:72]` | PLZ |
//! | `[72:107]` | Ort |
//! | `[107:134]` | Kurzbezeichnung |
//! | `[134:139]` | PAN |
//! | `[139:150]` | BIC |
//! | `[150:]` | check digit method, change flags, successor BLZ |

use crate::core::{BankdatenError, RegistryEntry};

/// Lines shorter than this cannot hold a BIC column and are skipped.
pub const FEED_MIN_LINE_LEN: usize = 150;

const ROUTING_CODE: (usize, usize) = (0, 8);
const BANK_NAME: (usize, usize) = (9, 67);
const CITY: (usize, usize) = (72, 107);
const BIC: (usize, usize) = (139, 150);

/// Source of the raw registry feed text.
///
/// Called at most once per [`load_registry`](super::load_registry), and only
/// when no valid cache artifact exists.
pub trait FeedSource {
    /// Return the full feed, already decoded to text.
    fn fetch(&self) -> Result<String, BankdatenError>;
}

/// A feed held in memory, e.g. a file shipped alongside the application.
#[derive(Debug, Clone)]
pub struct StaticFeed(pub String);

impl FeedSource for StaticFeed {
    fn fetch(&self) -> Result<String, BankdatenError> {
        Ok(self.0.clone())
    }
}

/// Decode ISO-8859-1 bytes. Every byte maps to the code point of the same value.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Parse all bank records from the fixed-width feed text.
///
/// Lines shorter than [`FEED_MIN_LINE_LEN`] characters and lines whose
/// routing code is not 8 digits are skipped. Duplicates are kept; the
/// registry drops them when it is built.
pub fn parse_feed(text: &str) -> Vec<RegistryEntry> {
    let mut entries = Vec::new();
    let mut skipped = 0usize;

    for line in text.lines() {
        let chars: Vec<char> = line.chars().collect();
        if chars.len() < FEED_MIN_LINE_LEN {
            skipped += 1;
            continue;
        }

        let routing_code = field(&chars, ROUTING_CODE);
        if routing_code.len() != 8 || !routing_code.bytes().all(|b| b.is_ascii_digit()) {
            skipped += 1;
            continue;
        }

        entries.push(RegistryEntry {
            routing_code,
            bank_name: field(&chars, BANK_NAME),
            city: field(&chars, CITY),
            bic: field(&chars, BIC),
        });
    }

    if skipped > 0 {
        tracing::debug!(skipped, parsed = entries.len(), "skipped short or malformed feed lines");
    }
    entries
}

fn field(chars: &[char], (start, end): (usize, usize)) -> String {
    chars[start..end].iter().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build one fixed-width line the way the Bundesbank file lays it out.
    fn line(blz: &str, merkmal: &str, name: &str, plz: &str, city: &str, bic: &str) -> String {
        format!(
            "{blz:<8}{merkmal:<1}{name:<58}{plz:<5}{city:<35}{short:<27}{pan:<5}{bic:<11}{rest:<18}",
            short = "",
            pan = "",
            rest = "09U000000000",
        )
    }

    #[test]
    fn line_builder_matches_layout() {
        let l = line("10010010", "1", "Postbank", "10916", "Berlin", "PBNKDEFFXXX");
        assert_eq!(l.chars().count(), 168);
        assert_eq!(&l[139..150], "PBNKDEFFXXX");
    }

    #[test]
    fn parses_fields() {
        let text = line(
            "10010010",
            "1",
            "Postbank Ndl der Deutsche Bank",
            "10916",
            "Berlin",
            "PBNKDEFFXXX",
        );
        let entries = parse_feed(&text);
        assert_eq!(
            entries,
            vec![RegistryEntry::new(
                "10010010",
                "Postbank Ndl der Deutsche Bank",
                "Berlin",
                "PBNKDEFFXXX"
            )]
        );
    }

    #[test]
    fn umlauts_count_as_one_column() {
        let text = line("70150000", "1", "Stadtsparkasse München", "80791", "München", "SSKMDEMMXXX");
        let entries = parse_feed(&text);
        assert_eq!(entries[0].bank_name, "Stadtsparkasse München");
        assert_eq!(entries[0].city, "München");
        assert_eq!(entries[0].bic, "SSKMDEMMXXX");
    }

    #[test]
    fn branch_without_bic() {
        let text = line("10010010", "2", "Postbank", "10916", "Berlin", "");
        assert_eq!(parse_feed(&text)[0].bic, "");
    }

    #[test]
    fn short_and_malformed_lines_skipped() {
        let mut text = String::from("too short\n");
        text.push_str(&line("ABCDEFGH", "1", "Bad", "00000", "Nowhere", ""));
        text.push('\n');
        text.push_str(&line("10020000", "1", "Berliner Bank", "10789", "Berlin", "BEVODEBBXXX"));
        text.push_str("\r\n\n");
        let entries = parse_feed(&text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].routing_code, "10020000");
    }

    #[test]
    fn latin1_decoding() {
        // "Köln" in ISO-8859-1
        assert_eq!(decode_latin1(&[0x4B, 0xF6, 0x6C, 0x6E]), "Köln");
    }

    #[test]
    fn static_feed_returns_text() {
        let feed = StaticFeed("abc".into());
        assert_eq!(feed.fetch().unwrap(), "abc");
    }
}
