use convert_case::Converter;

/// Convert an identifier into space-separated, capitalized words
/// (`registerBook` -> `Register Book`, `ISO8601DateTime` -> `ISO 8601 Date Time`).
///
/// Words are split on `convert_case`'s default boundaries (separators, case
/// changes, acronyms, and digits). Only the first letter of each word is
/// changed, so acronyms keep their capitals.
pub fn start_case(ident: &str) -> String {
    Converter::new()
        .set_delim(" ")
        .convert(ident)
        .split(' ')
        .map(upper_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::start_case;

    #[test]
    fn camel_case() {
        assert_eq!(start_case("registerBook"), "Register Book");
        assert_eq!(start_case("pageCount"), "Page Count");
    }

    #[test]
    fn single_lowercase_word() {
        assert_eq!(start_case("id"), "Id");
    }

    #[test]
    fn separators_are_dropped() {
        assert_eq!(start_case("page_count"), "Page Count");
        assert_eq!(start_case("page-count"), "Page Count");
    }

    #[test]
    fn acronyms_and_digits() {
        assert_eq!(start_case("ISO8601DateTime"), "ISO 8601 Date Time");
        assert_eq!(start_case("bookISBN"), "Book ISBN");
        assert_eq!(start_case("XMLHttpRequest"), "XML Http Request");
    }

    #[test]
    fn empty_input() {
        assert_eq!(start_case(""), "");
    }
}
