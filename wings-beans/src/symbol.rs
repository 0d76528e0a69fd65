//! Closed enumerations
//!
//! Every enumeration in this crate is declared through `symbol_enum!` so the
//! variant, its wire symbol and its display label live in one table. The wire
//! symbol is what crosses process boundaries and must stay spelled exactly as
//! the counterpart services expect.

use crate::error::{BeanError, Result};

/// A closed set of symbolic constants
pub trait Symbol: Copy + Eq + Sized + 'static {
    /// Kebab-case name of the enumeration, used by the catalog
    const KIND: &'static str;

    /// Every member, in declared order
    fn all() -> &'static [Self];

    /// Wire symbol
    fn as_str(&self) -> &'static str;

    /// Human readable label; the wire symbol when none is declared
    fn display_name(&self) -> &'static str {
        self.as_str()
    }

    /// Parse a wire symbol. Matching is exact and case-sensitive.
    fn from_symbol(value: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|member| member.as_str() == value)
            .ok_or_else(|| BeanError::UnknownSymbol {
                kind: Self::KIND,
                value: value.to_string(),
            })
    }
}

/// Declares an enumeration together with its wire symbols and labels.
///
/// ```ignore
/// symbol_enum! {
///     /// Execution order of pipeline stages
///     pub enum ExecutionStrategy: "execution-strategy" {
///         Serial => "SERIAL",
///         Parallel => "PARALLEL",
///     }
/// }
/// ```
///
/// A label can follow the symbol: `GroupName => "GROUP_NAME" ("Group Name")`.
macro_rules! symbol_enum {
    (@label $symbol:literal) => {
        $symbol
    };
    (@label $symbol:literal, $label:literal) => {
        $label
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $kind:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $symbol:literal $(($label:literal))?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $symbol)]
                $variant,
            )+
        }

        impl $crate::symbol::Symbol for $name {
            const KIND: &'static str = $kind;

            fn all() -> &'static [Self] {
                &[$(Self::$variant),+]
            }

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $symbol,)+
                }
            }

            fn display_name(&self) -> &'static str {
                match self {
                    $(Self::$variant => symbol_enum!(@label $symbol $(, $label)?),)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::symbol::Symbol::as_str(self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::BeanError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                <Self as $crate::symbol::Symbol>::from_symbol(s)
            }
        }
    };
}

/// Symbol and label pairs of an enumeration, in declared order
pub fn pairs<T: Symbol>() -> Vec<(&'static str, &'static str)> {
    T::all()
        .iter()
        .map(|member| (member.as_str(), member.display_name()))
        .collect()
}
