//! Generation I Pokémon (English) text encoding.
//!
//! The table is declared as ordered `(hex key, glyph)` pairs and folded into
//! a map; when a key is declared more than once the later pair wins.

use std::collections::HashMap;
use std::sync::LazyLock;

const GLYPH_PAIRS: &[(&str, &str)] = &[
    ("00", "\u{0}"),
    ("4E", "\n"),
    ("4F", "\n"),
    ("50", "@"),
    ("51", "\n"),
    ("55", "\n"),
    ("57", "#"),
    ("F8", "3"),
    ("80", " "),
    ("7F", " "),
    ("80", "A"),
    ("81", "B"),
    ("82", "C"),
    ("83", "D"),
    ("84", "E"),
    ("85", "F"),
    ("86", "G"),
    ("87", "H"),
    ("88", "I"),
    ("89", "J"),
    ("8A", "K"),
    ("8B", "L"),
    ("8C", "M"),
    ("8D", "N"),
    ("8E", "O"),
    ("8F", "P"),
    ("90", "Q"),
    ("91", "R"),
    ("92", "S"),
    ("93", "T"),
    ("94", "U"),
    ("95", "V"),
    ("96", "W"),
    ("97", "X"),
    ("98", "Y"),
    ("99", "Z"),
    ("9A", "("),
    ("9B", ")"),
    ("9C", ":"),
    ("9D", ";"),
    ("9E", "["),
    ("9F", "]"),
    ("A0", "a"),
    ("A1", "b"),
    ("A2", "c"),
    ("A3", "d"),
    ("A4", "e"),
    ("A5", "f"),
    ("A6", "g"),
    ("A7", "h"),
    ("A8", "i"),
    ("A9", "j"),
    ("AA", "k"),
    ("AB", "l"),
    ("AC", "m"),
    ("AD", "n"),
    ("AE", "o"),
    ("AF", "p"),
    ("B0", "q"),
    ("B1", "r"),
    ("B2", "s"),
    ("B3", "t"),
    ("B4", "u"),
    ("B5", "v"),
    ("B6", "w"),
    ("B7", "x"),
    ("B8", "y"),
    ("B9", "z"),
    ("BA", "é"),
    ("BB", "'d"),
    ("BC", "'l"),
    ("BD", "'s"),
    ("BE", "'t"),
    ("BF", "'v"),
    ("E0", "'"),
    ("E1", "PK"),
    ("E2", "MN"),
    ("E3", "-"),
    ("E4", "'r"),
    ("E5", "'m"),
    ("E6", "?"),
    ("E7", "!"),
    ("E8", "."),
    ("ED", "▶"),
    ("EE", "▼"),
    ("EF", "♂"),
    ("F0", "¥"),
    ("F1", "×"),
    ("F2", "."),
    ("F3", "/"),
    ("F4", ","),
    ("F5", "♀"),
    ("F6", "0"),
    ("F7", "1"),
    ("F8", "2"),
    ("F9", "3"),
    ("FA", "4"),
    ("FB", "5"),
    ("FC", "6"),
    ("FD", "7"),
    ("FE", "8"),
    ("FF", "9"),
];

static GLYPHS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    GLYPH_PAIRS
        .iter()
        .fold(HashMap::new(), |mut table, &(key, glyph)| {
            table.insert(key, glyph);
            table
        })
});

/// Look up the glyph for `byte`; unmapped bytes yield an empty string.
///
/// # Examples
/// ```
/// use hexlens_core::pokemon_glyph;
///
/// assert_eq!(pokemon_glyph(0x80), "A");
/// assert_eq!(pokemon_glyph(0x7F), " ");
/// assert_eq!(pokemon_glyph(0xC0), "");
/// ```
pub fn pokemon_glyph(byte: u8) -> &'static str {
    let key = format!("{byte:02X}");
    GLYPHS.get(key.as_str()).copied().unwrap_or("")
}
