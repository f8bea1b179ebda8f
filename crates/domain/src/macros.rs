//! Macro for implementing string conversions on closed domain enums
//!
//! Goal metrics and goal statuses travel through the app as lowercase string
//! literals (`"duration_raw"`, `"archived"`, ...). This macro keeps the
//! variant <-> literal table in one place and derives `as_str`, `Display`
//! and `FromStr` from it, so adding a variant without a literal is a compile
//! error.
//!
//! # Example
//!
//! ```rust
//! use timepal_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Mood {
//!     Calm,
//!     Restless,
//! }
//!
//! impl_domain_status_conversions!(Mood {
//!     Calm => "calm",
//!     Restless => "restless",
//! });
//!
//! assert_eq!(Mood::Calm.to_string(), "calm");
//! assert_eq!("RESTLESS".parse::<Mood>(), Ok(Mood::Restless));
//! ```

/// Implements `as_str`, `Display` and `FromStr` for closed domain enums
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their string
///   representations
///
/// Parsing is case-insensitive; output is always the mapped literal.
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Wire literal for this variant
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Cadence {
        Daily,
        Weekly,
        AdHoc,
    }

    impl_domain_status_conversions!(Cadence {
        Daily => "daily",
        Weekly => "weekly",
        AdHoc => "ad_hoc",
    });

    #[test]
    fn display_uses_literal() {
        assert_eq!(Cadence::Daily.to_string(), "daily");
        assert_eq!(Cadence::AdHoc.to_string(), "ad_hoc");
        assert_eq!(Cadence::Weekly.as_str(), "weekly");
    }

    #[test]
    fn parsing_ignores_case() {
        assert_eq!(Cadence::from_str("WEEKLY").unwrap(), Cadence::Weekly);
        assert_eq!(Cadence::from_str("Ad_Hoc").unwrap(), Cadence::AdHoc);
    }

    #[test]
    fn rejects_unknown_literal() {
        let err = Cadence::from_str("hourly").unwrap_err();
        assert!(err.contains("Invalid Cadence: hourly"));
        assert!(Cadence::from_str("").is_err());
    }
}
