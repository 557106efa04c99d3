/// Normalizes a user-supplied icon name into a camel-case identifier.
///
/// Hyphens and whitespace act as word separators; every other character that
/// is not an ASCII letter, digit, or underscore is stripped. The first
/// segment's first letter is lowercased, each later segment's first letter is
/// uppercased, and the rest of every segment keeps its original case.
///
/// Infallible: input that strips down to nothing yields an empty string, which
/// callers must reject before using the result as an identifier.
///
/// ```
/// use svgcon::name::camel_case;
///
/// assert_eq!(camel_case("meu-novo-icone!"), "meuNovoIcone");
/// assert_eq!(camel_case("my icon"), "myIcon");
/// assert_eq!(camel_case("ICON_2x"), "iCON2x");
/// ```
pub fn camel_case(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .map(|c| if c == '-' || c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();

    let mut segments = cleaned.split('_').filter(|s| !s.is_empty());

    let Some(first) = segments.next() else {
        return String::new();
    };

    let mut identifier = String::with_capacity(cleaned.len());
    let mut chars = first.chars();
    if let Some(c) = chars.next() {
        identifier.extend(c.to_lowercase());
        identifier.push_str(chars.as_str());
    }

    for segment in segments {
        let mut chars = segment.chars();
        if let Some(c) = chars.next() {
            identifier.extend(c.to_uppercase());
            identifier.push_str(chars.as_str());
        }
    }

    identifier
}
