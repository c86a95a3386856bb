//! Index-driven scanner for abbreviated sargam text
//!
//! The scan is a single left-to-right pass. A note token starts at any
//! note letter (`srgmpdnSRGMPDN`) or degree digit (`123`) and absorbs one
//! directly following degree digit. Everything else is a literal copied
//! through unchanged.

/// Characters that start a note token
pub const NOTE_CHARS: &str = "srgmpdnSRGMPDN";

/// Degree digits distinguishing variants of a note letter
pub const DEGREE_DIGITS: &str = "123";

/// One piece of scanned input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A token to resolve, with its character offset in the input
    Note { token: String, position: usize },
    /// A character passed through verbatim
    Literal(char),
}

pub fn is_note_char(c: char) -> bool {
    NOTE_CHARS.contains(c)
}

pub fn is_degree_digit(c: char) -> bool {
    DEGREE_DIGITS.contains(c)
}

/// Split input into note tokens and literals
pub fn tokenize(input: &str) -> Vec<Segment> {
    let chars: Vec<char> = input.chars().collect();
    let mut segments = Vec::with_capacity(chars.len());
    let mut index = 0;

    while index < chars.len() {
        let c = chars[index];

        if !is_note_char(c) && !is_degree_digit(c) {
            segments.push(Segment::Literal(c));
        } else {
            let position = index;
            let mut token = String::with_capacity(2);
            token.push(c);

            // Last character is always a single-character token
            if let Some(&next) = chars.get(index + 1) {
                if is_degree_digit(next) {
                    token.push(next);
                    index += 1;
                }
            }

            segments.push(Segment::Note { token, position });
        }

        index += 1;
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(token: &str, position: usize) -> Segment {
        Segment::Note {
            token: token.to_string(),
            position,
        }
    }

    #[test]
    fn test_single_tokens() {
        assert_eq!(tokenize("s"), vec![note("s", 0)]);
        assert_eq!(tokenize("r1"), vec![note("r1", 0)]);
        assert_eq!(tokenize("N3"), vec![note("N3", 0)]);
    }

    #[test]
    fn test_adjacent_tokens_without_separator() {
        assert_eq!(tokenize("sr1"), vec![note("s", 0), note("r1", 1)]);
        assert_eq!(tokenize("g3m1p"), vec![note("g3", 0), note("m1", 2), note("p", 4)]);
    }

    #[test]
    fn test_literals_pass_through() {
        assert_eq!(
            tokenize("s | p"),
            vec![
                note("s", 0),
                Segment::Literal(' '),
                Segment::Literal('|'),
                Segment::Literal(' '),
                note("p", 4),
            ]
        );
    }

    #[test]
    fn test_only_one_digit_is_absorbed() {
        assert_eq!(tokenize("r12"), vec![note("r1", 0), note("2", 2)]);
    }

    #[test]
    fn test_non_degree_digits_are_literals() {
        assert_eq!(
            tokenize("s4"),
            vec![note("s", 0), Segment::Literal('4')]
        );
    }

    #[test]
    fn test_stray_digit_starts_a_token() {
        assert_eq!(tokenize("2"), vec![note("2", 0)]);
        assert_eq!(tokenize(" 3"), vec![Segment::Literal(' '), note("3", 1)]);
    }

    #[test]
    fn test_note_char_at_end() {
        assert_eq!(tokenize("p1 d"), vec![note("p1", 0), Segment::Literal(' '), note("d", 3)]);
    }

    #[test]
    fn test_positions_count_characters() {
        assert_eq!(
            tokenize("é s"),
            vec![Segment::Literal('é'), Segment::Literal(' '), note("s", 2)]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }
}
