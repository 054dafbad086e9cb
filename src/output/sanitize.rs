//! Typographic quote normalization.

/// Curly quotes and their ASCII replacements.
const REPLACEMENTS: [(char, char); 4] = [
    ('\u{2018}', '\''),
    ('\u{2019}', '\''),
    ('\u{201C}', '"'),
    ('\u{201D}', '"'),
];

/// Replace typographic single and double quotes with ASCII ones.
pub fn sanitize_text(text: &str) -> String {
    text.chars()
        .map(|c| {
            REPLACEMENTS
                .iter()
                .find(|(from, _)| *from == c)
                .map_or(c, |(_, to)| *to)
        })
        .collect()
}
