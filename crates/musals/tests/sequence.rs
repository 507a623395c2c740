//! Tests for the sequence helpers in `musals::sequence`.

use musals::{reverse_complement, sequence::complement};
use test_case::test_case;

#[test_case("ACGT", "acgt" ; "palindrome")]
#[test_case("AACG", "cgtt" ; "upper")]
#[test_case("aacg", "cgtt" ; "lower")]
#[test_case("AaCcGgTt", "aaccggtt" ; "mixed case")]
#[test_case("ACNGT", "acNgt" ; "unknown base")]
#[test_case("AC-GTx", "xac-gt" ; "gap and other symbols")]
#[test_case("RYn", "nYR" ; "iupac codes keep their case")]
#[test_case("", "" ; "empty")]
fn reverse_complements(sequence: &str, expected: &str) {
    let actual = reverse_complement(sequence.as_bytes());
    assert_eq!(String::from_utf8_lossy(&actual), expected);
    assert_eq!(actual.len(), sequence.len());
}

#[test]
fn twice_is_lowercase_identity() {
    let sequence = b"GATTACAnN-";
    let twice = reverse_complement(&reverse_complement(sequence));
    assert_eq!(twice, b"gattacanN-");
}

#[test]
fn complement_table() {
    for (base, expected) in [(b'A', b't'), (b'a', b't'), (b'C', b'g'), (b'c', b'g'), (b'G', b'c'), (b'g', b'c'), (b'T', b'a'), (b't', b'a')] {
        assert_eq!(complement(base), expected, "{}", base as char);
    }
    for base in [b'N', b'n', b'U', b'-', b'.', b'*'] {
        assert_eq!(complement(base), base);
    }
}
