pub const DEFAULT_PROMPT_TEMPLATE: &str = "Translate the following text into {target_language}. \
     Output only the translation, without explanations or commentary. \
     Preserve the original formatting.\n\n{text}";

/// Builds the translation prompt by substituting `{target_language}` and
/// `{text}` into the template.
///
/// Substitution is literal and first-occurrence-only. A template missing a
/// placeholder is not an error; that substitution is simply a no-op.
#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_prompt(template: &str, target_language: &str, text: &str) -> String {
    // {target_language} and {text} are placeholders for string replacement,
    // not format arguments
    template
        .replacen("{target_language}", target_language, 1)
        .replacen("{text}", text, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt_substitutes_both_placeholders() {
        let prompt = build_prompt("Translate to {target_language}: {text}", "French", "Hi");
        assert_eq!(prompt, "Translate to French: Hi");
    }

    #[test]
    fn test_build_prompt_replaces_first_occurrence_only() {
        let prompt = build_prompt("{text} / {text} in {target_language}", "German", "Hallo");
        assert_eq!(prompt, "Hallo / {text} in German");
    }

    #[test]
    fn test_build_prompt_missing_placeholder_is_noop() {
        let prompt = build_prompt("Just translate: {text}", "Japanese", "Hello");
        assert_eq!(prompt, "Just translate: Hello");

        let prompt = build_prompt("No placeholders here", "Japanese", "Hello");
        assert_eq!(prompt, "No placeholders here");
    }

    #[test]
    fn test_build_prompt_placeholder_order_does_not_matter() {
        let prompt = build_prompt("{text} -> {target_language}", "Italian", "Ciao");
        assert_eq!(prompt, "Ciao -> Italian");
    }

    #[test]
    fn test_default_template_has_both_placeholders() {
        assert!(DEFAULT_PROMPT_TEMPLATE.contains("{target_language}"));
        assert!(DEFAULT_PROMPT_TEMPLATE.contains("{text}"));
    }
}
