use std::fmt::Display;

/// Persian-script digit glyphs, indexed by ASCII digit value.
const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Render a value with every ASCII digit replaced by its Persian-script
/// equivalent.
///
/// This is a literal character-level transform: the value is converted with
/// its `Display` impl, `'0'..='9'` map to `'۰'..='۹'`, and every other
/// character (letters, punctuation, digits already in Persian script) passes
/// through in its original position. The output always has the same number of
/// characters as the input's `Display` form.
///
/// ```
/// use parsi_format::to_persian_digits;
///
/// assert_eq!(to_persian_digits(99), "۹۹");
/// assert_eq!(to_persian_digits("2024-01-05"), "۲۰۲۴-۰۱-۰۵");
/// ```
pub fn to_persian_digits(value: impl Display) -> String {
    let text = value.to_string();
    // Persian digit glyphs are two bytes in UTF-8.
    let mut out = String::with_capacity(text.len() * 2);
    for ch in text.chars() {
        match ch {
            '0'..='9' => out.push(PERSIAN_DIGITS[ch as usize - '0' as usize]),
            other => out.push(other),
        }
    }
    out
}
