/// Styling class of a single character cell in the word list. The renderer
/// maps these to terminal colors; the classifier itself holds no state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Untyped/future character, or a position outside the current word.
    None,
    /// Typed character matches the target at this position.
    Success,
    /// Typed character differs from the target at this position.
    Failure,
    /// The typed word is already longer than the target word.
    Overflow,
    /// The typed character is an uppercase letter. Checked before Failure.
    Uppercase,
}

/// Classifies one position of the current target word against the typed
/// input. `typed` is the trimmed input buffer, `typed_upto` the character
/// cursor (None before the first character of the word).
///
/// Precedence follows the legend: a too-long word flags every position as
/// Overflow, a matching typed character wins over everything below it, and
/// an uppercase typed character outranks a plain mismatch.
pub fn classify_char(target: &str, typed: &str, typed_upto: Option<usize>, pos: usize) -> CharClass {
    if typed.chars().count() > target.chars().count() {
        return CharClass::Overflow;
    }

    let within_typed = typed_upto.is_some_and(|upto| pos <= upto);
    let typed_char = typed.chars().nth(pos);

    if within_typed && typed_char.is_some() && typed_char == target.chars().nth(pos) {
        return CharClass::Success;
    }

    if typed_char.is_some_and(|c| c.is_ascii_alphabetic() && c.is_ascii_uppercase()) {
        return CharClass::Uppercase;
    }

    if within_typed {
        return CharClass::Failure;
    }

    CharClass::None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untyped_positions_have_no_class() {
        assert_eq!(classify_char("cat", "", None, 0), CharClass::None);
        assert_eq!(classify_char("cat", "c", Some(0), 1), CharClass::None);
        assert_eq!(classify_char("cat", "c", Some(0), 2), CharClass::None);
    }

    #[test]
    fn matching_characters_are_success() {
        assert_eq!(classify_char("cat", "ca", Some(1), 0), CharClass::Success);
        assert_eq!(classify_char("cat", "ca", Some(1), 1), CharClass::Success);
    }

    #[test]
    fn mismatched_characters_are_failure() {
        assert_eq!(classify_char("cat", "cx", Some(1), 1), CharClass::Failure);
    }

    #[test]
    fn a_correct_prefix_survives_a_later_mistake() {
        assert_eq!(classify_char("cat", "cx", Some(1), 0), CharClass::Success);
    }

    #[test]
    fn uppercase_wins_over_failure() {
        // 'C' both mismatches lowercase 'c' and is uppercase; the uppercase
        // warning takes precedence.
        assert_eq!(classify_char("cat", "Ca", Some(1), 0), CharClass::Uppercase);
        assert_eq!(classify_char("cat", "Ca", Some(1), 1), CharClass::Success);
    }

    #[test]
    fn uppercase_flags_any_typed_uppercase_position() {
        assert_eq!(classify_char("cat", "cA", Some(1), 1), CharClass::Uppercase);
    }

    #[test]
    fn overflow_flags_every_position() {
        for pos in 0..3 {
            assert_eq!(
                classify_char("cat", "cats", Some(3), pos),
                CharClass::Overflow
            );
        }
    }

    #[test]
    fn backspacing_out_of_overflow_restores_classes() {
        // "cats" shrank back to "cat" via backspace
        assert_eq!(classify_char("cat", "cat", Some(2), 2), CharClass::Success);
    }

    #[test]
    fn non_alphabetic_mismatch_is_failure_not_uppercase() {
        assert_eq!(classify_char("cat", "c4", Some(1), 1), CharClass::Failure);
    }
}
