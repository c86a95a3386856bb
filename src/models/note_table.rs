/// Lookup table from abbreviated sargam tokens to Western pitch classes
///
/// Format: token (base letter + optional degree digit 1-3) → pitch class label
///
/// Example:
///   "s"  → "c"     (Sa, lower octave band)
///   "r1" → "c#"    (first Re)
///   "G3" → "E"     (third Ga, upper octave band)
///
/// Lower-case tokens resolve to lower-case labels and upper-case tokens to
/// upper-case labels. Several tokens share a label (r2/g1, r3/g2, d2/n1,
/// d3/n2): these are enharmonic aliases, not mistakes.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// Lower octave band, in table order
const LOWER_OCTAVE: [(&str, &str); 16] = [
    ("s", "c"),
    ("r1", "c#"),
    ("r2", "d"),
    ("g1", "d"),
    ("g2", "d#"),
    ("r3", "d#"),
    ("g3", "e"),
    ("m1", "f"),
    ("m2", "f#"),
    ("p", "g"),
    ("d1", "g#"),
    ("d2", "a"),
    ("n1", "a"),
    ("n2", "a#"),
    ("d3", "a#"),
    ("n3", "b"),
];

const UPPER_OCTAVE: [(&str, &str); 16] = [
    ("S", "C"),
    ("R1", "C#"),
    ("R2", "D"),
    ("G1", "D"),
    ("G2", "D#"),
    ("R3", "D#"),
    ("G3", "E"),
    ("M1", "F"),
    ("M2", "F#"),
    ("P", "G"),
    ("D1", "G#"),
    ("D2", "A"),
    ("N1", "A"),
    ("N2", "A#"),
    ("D3", "A#"),
    ("N3", "B"),
];

static GLOBAL: Lazy<NoteTable> = Lazy::new(NoteTable::build);

/// Immutable token → Western label mapping
#[derive(Debug, Clone)]
pub struct NoteTable {
    entries: HashMap<&'static str, &'static str>,
    /// Tokens in construction order, for listings
    order: Vec<&'static str>,
}

impl NoteTable {
    /// Build the complete table for both octave bands
    pub fn build() -> Self {
        let mut table = NoteTable {
            entries: HashMap::with_capacity(32),
            order: Vec::with_capacity(32),
        };

        for &(token, label) in LOWER_OCTAVE.iter() {
            table.insert(token, label);
        }
        for &(token, label) in UPPER_OCTAVE.iter() {
            table.insert(token, label);
        }

        table
    }

    /// Process-wide table, built on first use
    pub fn global() -> &'static NoteTable {
        &GLOBAL
    }

    fn insert(&mut self, token: &'static str, label: &'static str) {
        if self.entries.insert(token, label).is_none() {
            self.order.push(token);
        }
    }

    /// Resolve a token to its Western label
    pub fn get(&self, token: &str) -> Option<&'static str> {
        self.entries.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Canonical tokens, lower octave first
    pub fn tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }

    /// (token, label) pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.order
            .iter()
            .filter_map(move |token| self.entries.get(token).map(|label| (*token, *label)))
    }

    /// Pairs as owned rows, for serializing the legend
    pub fn rows(&self) -> Vec<NoteTableRow> {
        self.iter()
            .map(|(token, western)| NoteTableRow { token, western })
            .collect()
    }
}

/// One row of the table as exposed to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NoteTableRow {
    pub token: &'static str,
    pub western: &'static str,
}
