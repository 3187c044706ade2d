use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Case-insensitive form used for substring search.
#[must_use]
pub fn fold_case(text: &str) -> String {
    text.nfkc().collect::<String>().to_lowercase()
}

/// Accent-insensitive, case-insensitive key so that `Élie` sorts next to
/// `Eli` rather than after `Zoé`.
#[must_use]
pub fn collation_key(text: &str) -> String {
    text.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Returns `None` for missing or blank text, the trimmed value otherwise.
#[must_use]
pub fn non_blank(text: Option<String>) -> Option<String> {
    text.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_case_simple_string() {
        assert_eq!(fold_case("Kylian Mbappé"), "kylian mbappé");
    }

    #[test]
    fn test_fold_case_mixed_case() {
        assert_eq!(fold_case("PaRiS SaInT-GeRmAiN"), "paris saint-germain");
    }

    #[test]
    fn test_fold_case_compatibility_forms() {
        // NFKC folds the ligature before lowercasing
        assert_eq!(fold_case("ﬁnal"), "final");
    }

    #[test]
    fn test_fold_case_empty_string() {
        assert_eq!(fold_case(""), "");
    }

    #[test]
    fn test_fold_case_keeps_accents() {
        assert_eq!(fold_case("Olympique Lyonnais Éclair"), "olympique lyonnais éclair");
    }

    #[test]
    fn test_collation_key_strips_accents() {
        assert_eq!(collation_key("Élie"), "elie");
        assert_eq!(collation_key("Señor"), "senor");
    }

    #[test]
    fn test_collation_key_orders_accented_with_plain() {
        let mut names = vec!["Zoé", "Élie", "Adam"];
        names.sort_by_key(|name| collation_key(name));
        assert_eq!(names, vec!["Adam", "Élie", "Zoé"]);
    }

    #[test]
    fn test_collation_key_idempotent() {
        let first = collation_key("Ousmane Dembélé");
        let second = collation_key(&first);
        assert_eq!(first, second);
    }

    #[test]
    fn test_non_blank_trims() {
        assert_eq!(non_blank(Some(String::from("  PSG "))), Some(String::from("PSG")));
    }

    #[test]
    fn test_non_blank_rejects_blank() {
        assert_eq!(non_blank(Some(String::from("   "))), None);
        assert_eq!(non_blank(None), None);
    }
}
