//! Macro for implementing Display and FromStr for vendor string enums
//!
//! The vendor mixes casing conventions, so parsing is case-insensitive while
//! `Display` always renders the exact literal given to the macro.
//!
//! # Example
//!
//! ```rust
//! use intercall_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Direction {
//!     Enable,
//!     Disable,
//! }
//!
//! impl_domain_status_conversions!(Direction {
//!     Enable => "enable",
//!     Disable => "disable",
//! });
//! ```

/// Implements Display and FromStr traits for vendor string enums
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their wire literal.
///   Additional `|`-separated literals are accepted when parsing only.
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal $(| $alias:literal)*),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                $(
                    if trimmed.eq_ignore_ascii_case($str)
                        $(|| trimmed.eq_ignore_ascii_case($alias))*
                    {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestKind {
        Local,
        TollFree,
    }

    impl_domain_status_conversions!(TestKind {
        Local => "LOCAL",
        TollFree => "TOLL-FREE" | "toll_free",
    });

    #[test]
    fn test_display_uses_exact_literal() {
        assert_eq!(TestKind::Local.to_string(), "LOCAL");
        assert_eq!(TestKind::TollFree.to_string(), "TOLL-FREE");
    }

    #[test]
    fn test_fromstr_is_case_insensitive() {
        assert_eq!(TestKind::from_str("local").unwrap(), TestKind::Local);
        assert_eq!(TestKind::from_str("Toll-Free").unwrap(), TestKind::TollFree);
    }

    #[test]
    fn test_fromstr_accepts_aliases_and_padding() {
        assert_eq!(TestKind::from_str("TOLL_FREE").unwrap(), TestKind::TollFree);
        assert_eq!(TestKind::from_str("  LOCAL  ").unwrap(), TestKind::Local);
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = TestKind::from_str("premium");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid TestKind: premium"));
    }

    #[test]
    fn test_roundtrip() {
        for kind in [TestKind::Local, TestKind::TollFree] {
            let parsed = TestKind::from_str(&kind.to_string()).unwrap();
            assert_eq!(kind, parsed);
        }
    }
}
