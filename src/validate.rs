// File: src/validate.rs
// Password strength rules for the account forms. Each rule is reported
// separately so the form can show the user exactly what is missing.
use once_cell::sync::Lazy;
use regex::Regex;

pub const MIN_PASSWORD_LENGTH: usize = 8;

static UPPER_CASE: Lazy<Regex> = Lazy::new(|| Regex::new("[A-Z]").unwrap());
static LOWER_CASE: Lazy<Regex> = Lazy::new(|| Regex::new("[a-z]").unwrap());
static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").unwrap());
static SPECIAL_CHAR: Lazy<Regex> = Lazy::new(|| Regex::new(r#"[!@#$%^&*(),.?":{}|<>]"#).unwrap());

/// Per-rule failure flags; a `true` flag means the rule was violated.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct PasswordReport {
    pub length: bool,
    pub upper_case: bool,
    pub lower_case: bool,
    pub digit: bool,
    pub special_char: bool,
}

impl PasswordReport {
    pub fn is_valid(&self) -> bool {
        !(self.length || self.upper_case || self.lower_case || self.digit || self.special_char)
    }

    /// Human-readable labels for every violated rule, in display order.
    pub fn violations(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.length {
            out.push("at least 8 characters");
        }
        if self.upper_case {
            out.push("an upper-case letter");
        }
        if self.lower_case {
            out.push("a lower-case letter");
        }
        if self.digit {
            out.push("a digit");
        }
        if self.special_char {
            out.push("a special character");
        }
        out
    }
}

pub fn check_password(password: &str) -> PasswordReport {
    PasswordReport {
        length: password.chars().count() < MIN_PASSWORD_LENGTH,
        upper_case: !UPPER_CASE.is_match(password),
        lower_case: !LOWER_CASE.is_match(password),
        digit: !DIGIT.is_match(password),
        special_char: !SPECIAL_CHAR.is_match(password),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strong_password_passes_every_rule() {
        let report = check_password("Str0ng!pass");
        assert_eq!(report, PasswordReport::default());
        assert!(report.is_valid());
        assert!(report.violations().is_empty());
    }

    #[test]
    fn each_rule_is_flagged_independently() {
        assert!(check_password("Ab1!xyz").length);
        assert!(check_password("lowercase1!").upper_case);
        assert!(check_password("UPPERCASE1!").lower_case);
        assert!(check_password("NoDigits!!").digit);
        assert!(check_password("NoSpecial11").special_char);
    }

    #[test]
    fn empty_password_fails_everything() {
        let report = check_password("");
        assert!(!report.is_valid());
        assert_eq!(report.violations().len(), 5);
    }

    #[test]
    fn boundary_length_is_accepted() {
        // Exactly MIN_PASSWORD_LENGTH characters.
        let report = check_password("Abc123!?");
        assert!(!report.length);
        assert!(report.is_valid());
    }
}
