/// Converts a name as it appears on the wire (`NewDataSet`, `GetORResult`, `Tarifar_Envio_CorporativoResponse`)
/// into the snake case key used for lookups in a [Value][crate::value::Value] tree.
///
/// A separator is inserted before an upper-case letter that follows a lower-case letter or a digit, and before the
/// last letter of an upper-case run when a lower-case letter comes next. `-` and `.` become `_`. The result is
/// lower-cased, so keys that are already canonical come back unchanged.
pub fn canonical_key(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let mut key = String::with_capacity(raw.len() + 4);

    for (index, &current) in chars.iter().enumerate() {
        if current.is_uppercase() && index > 0 {
            let previous = chars[index - 1];
            let next_is_lowercase = chars
                .get(index + 1)
                .is_some_and(|next| next.is_lowercase());

            if previous.is_lowercase()
                || previous.is_ascii_digit()
                || (previous.is_uppercase() && next_is_lowercase)
            {
                key.push('_');
            }
        }

        match current {
            '-' | '.' => key.push('_'),
            _ => key.extend(current.to_lowercase()),
        }
    }

    key
}
