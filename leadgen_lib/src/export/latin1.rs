/// Makes text safe for the single-byte encoding of the built-in PDF fonts.
///
/// Common typographic punctuation is folded to ASCII first; C1 control
/// characters and anything above U+00FF become `?`.
pub fn to_latin1_safe(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{2032}' => out.push('\''),
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' => out.push('"'),
            '\u{2010}'..='\u{2015}' | '\u{2212}' => out.push('-'),
            '\u{2026}' => out.push_str("..."),
            '\u{2022}' => out.push('*'),
            '\u{20AC}' => out.push_str("EUR"),
            '\u{00A0}' | '\u{2009}' | '\u{202F}' => out.push(' '),
            '\u{0080}'..='\u{009F}' => out.push('?'),
            c if (c as u32) <= 0xFF => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}
