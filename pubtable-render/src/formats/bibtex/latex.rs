//! LaTeX-to-Unicode decoding for field values.
//!
//! Covers the accent commands and special letters that show up in author names
//! and titles, drops unescaped grouping braces and unwraps escaped specials.
//! Unknown commands are removed and their argument kept. Ties (`~`) and dash
//! ligatures are left alone; those belong to the typographic normalizer.

use std::iter::Peekable;
use std::str::Chars;

/// Pairs of (base letter, accented letter) per accent command
fn accent_table(accent: &str) -> Option<&'static str> {
    let table = match accent {
        "\"" => "aäeëiïoöuüyÿAÄEËIÏOÖUÜYŸ",
        "'" => "aáeéiíoóuúyýcćnńsśzźAÁEÉIÍOÓUÚYÝCĆNŃSŚZŹ",
        "`" => "aàeèiìoòuùAÀEÈIÌOÒUÙ",
        "^" => "aâeêiîoôuûAÂEÊIÎOÔUÛ",
        "~" => "aãnñoõAÃNÑOÕ",
        "=" => "aāeēiīoōuūAĀEĒIĪOŌUŪ",
        "." => "eėzżEĖZŻ",
        "c" => "cçsşCÇSŞ",
        "v" => "cčeěnňrřsšzžCČEĚNŇRŘSŠZŽ",
        "u" => "aăgğAĂGĞ",
        "H" => "oőuűOŐUŰ",
        "r" => "aåuůAÅUŮ",
        "k" => "aąeęAĄEĘ",
        _ => return None,
    };
    Some(table)
}

fn symbol(command: &str) -> Option<&'static str> {
    let symbol = match command {
        "ss" => "ß",
        "o" => "ø",
        "O" => "Ø",
        "ae" => "æ",
        "AE" => "Æ",
        "oe" => "œ",
        "OE" => "Œ",
        "aa" => "å",
        "AA" => "Å",
        "l" => "ł",
        "L" => "Ł",
        "i" => "ı",
        "j" => "ȷ",
        "textendash" => "\u{2013}",
        "textemdash" => "\u{2014}",
        _ => return None,
    };
    Some(symbol)
}

/// Decode LaTeX markup in a field value to plain Unicode text
pub fn decode_latex(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '{' | '}' => {}
            '\\' => decode_command(&mut chars, &mut out),
            _ => out.push(c),
        }
    }
    out
}

fn decode_command(chars: &mut Peekable<Chars<'_>>, out: &mut String) {
    let Some(&next) = chars.peek() else {
        out.push('\\');
        return;
    };

    if next.is_ascii_alphabetic() {
        let mut name = String::new();
        while let Some(&c) = chars.peek() {
            if !c.is_ascii_alphabetic() {
                break;
            }
            name.push(c);
            chars.next();
        }

        // Trailing spaces belong to known control words only
        if let Some(table) = accent_table(&name) {
            skip_spaces(chars);
            push_accented(out, table, take_argument(chars));
        } else if let Some(symbol) = symbol(&name) {
            skip_spaces(chars);
            out.push_str(symbol);
        }
        return;
    }

    chars.next();
    let accent = next.to_string();
    match accent_table(&accent) {
        Some(table) => push_accented(out, table, take_argument(chars)),
        None => out.push(next),
    }
}

fn skip_spaces(chars: &mut Peekable<Chars<'_>>) {
    while chars.peek() == Some(&' ') {
        chars.next();
    }
}

/// Read the letter an accent applies to: `a`, `{a}`, `\i` or `{\i}`
fn take_argument(chars: &mut Peekable<Chars<'_>>) -> Option<char> {
    let braced = chars.peek() == Some(&'{');
    if braced {
        chars.next();
    }
    let base = match chars.next()? {
        '\\' => match chars.next()? {
            'i' => 'i',
            'j' => 'j',
            other => other,
        },
        c => c,
    };
    if braced && chars.peek() == Some(&'}') {
        chars.next();
    }
    Some(base)
}

fn push_accented(out: &mut String, table: &str, base: Option<char>) {
    let Some(base) = base else {
        return;
    };
    let mut pairs = table.chars();
    while let (Some(plain), Some(accented)) = (pairs.next(), pairs.next()) {
        if plain == base {
            out.push(accented);
            return;
        }
    }
    out.push(base);
}
