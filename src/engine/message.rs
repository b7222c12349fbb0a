//! Failure message construction.
//!
//! Every check renders its failure text through `FluentMessage` so that all
//! failures share one shape: a headline built from a template, an optional
//! block quoting the checked value, and an optional block quoting the
//! expected value. Templates use `{0}` for "checked <entity>" and `{1}` for
//! "expected <entity>", where the entity noun defaults to `value` and can be
//! switched per check (`string`, `optional`, `duration`, `code`).

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Noun used in messages when no entity override is given.
const DEFAULT_ENTITY: &str = "value";

/// Builder for the structured failure messages raised by checks.
///
/// The rendered message always starts with a newline, so the headline lands
/// on its own line in test-runner output. Value blocks are indented with a
/// tab and bracketed.
///
/// # Example
///
/// ```rust
/// use veracity::FluentMessage;
///
/// let message = FluentMessage::new("The {0} is more than the limit.")
///     .on(&5)
///     .expected(&3)
///     .comparison("less than")
///     .render();
///
/// assert_eq!(
///     message,
///     "\nThe checked value is more than the limit.\
///      \nThe checked value:\n\t[5]\
///      \nThe expected value: less than\n\t[3]"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct FluentMessage {
    template: String,
    entity: &'static str,
    checked: Option<String>,
    expected: Option<String>,
    comparison: Option<&'static str>,
}

impl FluentMessage {
    /// Start a message from a headline template.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            entity: DEFAULT_ENTITY,
            checked: None,
            expected: None,
            comparison: None,
        }
    }

    // =========================================================================
    // Builder methods (chainable)
    // =========================================================================

    /// Switch the entity noun used in the headline and block labels.
    pub fn for_entity(mut self, entity: &'static str) -> Self {
        self.entity = entity;
        self
    }

    /// Quote the checked value in its own block.
    pub fn on<T: fmt::Debug + ?Sized>(mut self, value: &T) -> Self {
        self.checked = Some(format!("[{:?}]", value));
        self
    }

    /// Quote the checked value and annotate it with its runtime type.
    pub fn on_with_type<T: fmt::Debug + ?Sized>(mut self, value: &T) -> Self {
        self.checked = Some(format!("[{:?}] of type: [{}]", value, short_type_name::<T>()));
        self
    }

    /// Quote the expected value in its own block.
    pub fn expected<T: fmt::Debug + ?Sized>(mut self, value: &T) -> Self {
        self.expected = Some(format!("[{:?}]", value));
        self
    }

    /// Use free-form text for the expected block instead of a quoted value.
    pub fn expected_text(mut self, text: impl Into<String>) -> Self {
        self.expected = Some(text.into());
        self
    }

    /// Qualify the expected block label with a comparison phrase.
    pub fn comparison(mut self, phrase: &'static str) -> Self {
        self.comparison = Some(phrase);
        self
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render the complete failure message.
    pub fn render(&self) -> String {
        let headline = self
            .template
            .replace("{0}", &format!("checked {}", self.entity))
            .replace("{1}", &format!("expected {}", self.entity));

        let mut output = format!("\n{}", headline);

        if let Some(checked) = &self.checked {
            output.push_str(&format!("\nThe checked {}:\n\t{}", self.entity, checked));
        }

        if let Some(expected) = &self.expected {
            match self.comparison {
                Some(phrase) => output.push_str(&format!(
                    "\nThe expected {}: {}\n\t{}",
                    self.entity, phrase, expected
                )),
                None => output.push_str(&format!("\nThe expected {}:\n\t{}", self.entity, expected)),
            }
        }

        output
    }
}

impl fmt::Display for FluentMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// Short name of a type, with module paths stripped.
///
/// `core::option::Option<alloc::string::String>` becomes `Option<String>`.
/// Used wherever a message annotates a value with its runtime type.
pub fn short_type_name<T: ?Sized>() -> String {
    static PATH_SEGMENT: OnceLock<Regex> = OnceLock::new();
    let pattern = PATH_SEGMENT
        .get_or_init(|| Regex::new(r"\w+::").expect("path segment pattern should be valid"));
    pattern
        .replace_all(std::any::type_name::<T>(), "")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_headline_and_both_value_blocks() {
        let message = FluentMessage::new("The {0} is more than the limit.")
            .on(&5)
            .expected(&3)
            .comparison("less than")
            .render();

        assert_eq!(
            message,
            "\nThe checked value is more than the limit.\nThe checked value:\n\t[5]\nThe expected value: less than\n\t[3]"
        );
    }

    #[test]
    fn test_renders_headline_alone_when_no_blocks_are_set() {
        let message = FluentMessage::new("The {0} is equal to zero whereas it must not.").render();

        assert_eq!(message, "\nThe checked value is equal to zero whereas it must not.");
    }

    #[test]
    fn test_substitutes_the_expected_entity_placeholder() {
        let message = FluentMessage::new("The {0} differs from the {1}.").render();

        assert_eq!(message, "\nThe checked value differs from the expected value.");
    }

    #[test]
    fn test_entity_override_applies_to_headline_and_labels() {
        let message = FluentMessage::new("The {0} has no value, which is unexpected.")
            .for_entity("optional")
            .render();

        assert_eq!(
            message,
            "\nThe checked optional has no value, which is unexpected."
        );
    }

    #[test]
    fn test_expected_block_without_comparison_has_a_plain_label() {
        let message = FluentMessage::new("The {0} is different from the expected one.")
            .on(&"abc")
            .expected(&"abd")
            .render();

        assert_eq!(
            message,
            "\nThe checked value is different from the expected one.\nThe checked value:\n\t[\"abc\"]\nThe expected value:\n\t[\"abd\"]"
        );
    }

    #[test]
    fn test_on_with_type_annotates_the_checked_block() {
        let message = FluentMessage::new("The {0} is not an instance of [i32].")
            .on_with_type(&2u8)
            .render();

        assert_eq!(
            message,
            "\nThe checked value is not an instance of [i32].\nThe checked value:\n\t[2] of type: [u8]"
        );
    }

    #[test]
    fn test_expected_text_is_emitted_verbatim() {
        let message = FluentMessage::new("The {0} is not an instance of [i32].")
            .expected_text("an instance of type: [i32]")
            .render();

        assert_eq!(
            message,
            "\nThe checked value is not an instance of [i32].\nThe expected value:\n\tan instance of type: [i32]"
        );
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let message = FluentMessage::new("The {0} is not empty.").on(&"xy");

        assert_eq!(message.render(), message.render());
        assert_eq!(message.to_string(), message.render());
    }

    #[test]
    fn test_short_type_name_keeps_primitives_untouched() {
        assert_eq!(short_type_name::<u8>(), "u8");
        assert_eq!(short_type_name::<&str>(), "&str");
    }

    #[test]
    fn test_short_type_name_strips_module_paths() {
        assert_eq!(short_type_name::<String>(), "String");
        assert_eq!(short_type_name::<Option<u8>>(), "Option<u8>");
        assert_eq!(short_type_name::<Option<String>>(), "Option<String>");
        assert_eq!(short_type_name::<Vec<String>>(), "Vec<String>");
    }
}
