//! Input validation rules, one per step kind.
//!
//! Validation is deliberately shallow: the wizard only rejects input that a
//! person could not plausibly have meant, and re-prompts with a single
//! generic message. There is no error taxonomy beyond "try again".

use crate::script::{InputKind, Step};

/// Generic re-prompt shown for any rejected input.
pub const REVALIDATION_PROMPT: &str =
    "Por favor, verifique se as informações estão corretas e tente novamente.";

/// Does trimmed `input` satisfy the step's input kind?
///
/// Empty or whitespace-only input never validates, regardless of kind.
pub fn accepts(step: &Step, input: &str) -> bool {
    let input = input.trim();
    if input.is_empty() {
        return false;
    }
    match step.kind {
        InputKind::FreeText => input.chars().count() >= 2,
        InputKind::Email => is_valid_email(input),
        InputKind::Phone => is_valid_phone(input),
        InputKind::SingleChoice => step.options.contains(&input),
    }
}

/// Loose e-mail shape: local part, `@`, domain, `.`, tld — no whitespace,
/// no second `@`. Intentionally not RFC 5322.
pub fn is_valid_email(input: &str) -> bool {
    if input.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// At least 10 characters, all drawn from digits, spaces, parentheses,
/// `+` and `-`.
pub fn is_valid_phone(input: &str) -> bool {
    input.chars().count() >= 10 && input.chars().all(is_phone_char)
}

fn is_phone_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, ' ' | '(' | ')' | '+' | '-')
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::script::{AnswerField, Prompt},
        rstest::rstest,
    };

    fn step(kind: InputKind, options: &'static [&'static str]) -> Step {
        Step {
            prompt: Prompt::Static(""),
            field: AnswerField::Name,
            kind,
            options,
        }
    }

    #[rstest]
    #[case("a@b.co", true)]
    #[case("maria@example.com", true)]
    #[case("a.b@mail.example.org", true)]
    #[case("a@b", false)]
    #[case("a b@c.com", false)]
    #[case("", false)]
    #[case("a@@b.co", false)]
    #[case("@b.co", false)]
    #[case("a@.co", false)]
    #[case("a@b.", false)]
    fn email_rule(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(is_valid_email(input), valid, "{input:?}");
    }

    #[rstest]
    #[case("(11) 91234-5678", true)]
    #[case("+55 83 99319-3241", true)]
    #[case("1234567890", true)]
    #[case("123", false)]
    #[case("12345678x9", false)]
    #[case("", false)]
    fn phone_rule(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(is_valid_phone(input), valid, "{input:?}");
    }

    #[rstest]
    #[case("ok", true)]
    #[case("Maria Silva", true)]
    #[case("x", false)]
    #[case("  x  ", false)]
    #[case("   ", false)]
    fn free_text_needs_two_chars(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(accepts(&step(InputKind::FreeText, &[]), input), valid);
    }

    #[rstest]
    #[case("Orçamento", true)]
    #[case("Dúvida", true)]
    #[case("orçamento", false)]
    #[case("Reclamação", false)]
    fn choice_requires_membership(#[case] input: &str, #[case] valid: bool) {
        let options: &[&str] = &["Dúvida", "Orçamento", "Suporte", "Outro"];
        assert_eq!(accepts(&step(InputKind::SingleChoice, options), input), valid);
    }

    #[test]
    fn whitespace_never_validates() {
        for kind in [InputKind::FreeText, InputKind::Email, InputKind::Phone] {
            assert!(!accepts(&step(kind, &[]), "   \t "));
        }
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert!(accepts(&step(InputKind::Email, &[]), "  a@b.co  "));
    }
}
