use crate::printer::{Print, Printer};
use proptest::arbitrary::Arbitrary;
use smol_str::SmolStr;
use std::fmt;

/// Package of keyword symbols. Keywords print as `:NAME`.
pub const KEYWORD_PACKAGE: &str = "KEYWORD";

/// The false value and the empty list.
pub const NIL: &str = "NIL";

/// The true value.
pub const T: &str = "T";

/// Head of a list constructor form, `(LIST a b c)`.
pub const LIST: &str = "LIST";

/// Head of a character literal, `(CODE-CHAR n)`.
pub const CODE_CHAR: &str = "CODE-CHAR";

/// A possibly package-qualified symbol.
///
/// Symbols compare case-sensitively on both package and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol {
    package: Option<SmolStr>,
    name: SmolStr,
}

impl Symbol {
    /// An unqualified symbol such as `NIL` or `LIST`.
    pub fn bare(name: impl Into<SmolStr>) -> Self {
        let name = name.into();
        debug_assert!(is_valid_bare_name(&name), "invalid symbol name {name:?}");
        Self {
            package: None,
            name,
        }
    }

    /// A keyword symbol, printed as `:NAME`.
    pub fn keyword(name: impl Into<SmolStr>) -> Self {
        Self::qualified(KEYWORD_PACKAGE, name)
    }

    /// A symbol in the given package, printed as `PACKAGE::NAME`.
    pub fn qualified(package: impl Into<SmolStr>, name: impl Into<SmolStr>) -> Self {
        let package = package.into();
        let name = name.into();
        debug_assert!(is_valid_name(&package), "invalid package {package:?}");
        debug_assert!(is_valid_name(&name), "invalid symbol name {name:?}");
        Self {
            package: Some(package),
            name,
        }
    }

    pub fn nil() -> Self {
        Self::bare(NIL)
    }

    pub fn t() -> Self {
        Self::bare(T)
    }

    pub fn list() -> Self {
        Self::bare(LIST)
    }

    #[inline]
    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn is_keyword(&self) -> bool {
        self.package() == Some(KEYWORD_PACKAGE)
    }

    /// Whether this is the unqualified symbol `name`.
    #[inline]
    pub fn is_bare(&self, name: &str) -> bool {
        self.package.is_none() && self.name == name
    }

    #[inline]
    pub fn is_nil(&self) -> bool {
        self.is_bare(NIL)
    }
}

/// Characters allowed in package and symbol names.
pub(crate) fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

pub(crate) fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_name_char)
}

/// Bare symbols may not start like an integer.
pub(crate) fn is_valid_bare_name(name: &str) -> bool {
    is_valid_name(name) && !name.starts_with(|c: char| c.is_ascii_digit() || c == '-')
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.package() {
            None => f.write_str(&self.name),
            Some(KEYWORD_PACKAGE) => write!(f, ":{}", self.name),
            Some(package) => write!(f, "{}::{}", package, self.name),
        }
    }
}

impl Print for Symbol {
    fn print<P: Printer>(&self, printer: &mut P) -> Result<(), P::Error> {
        printer.symbol(self)
    }
}

impl Arbitrary for Symbol {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        use proptest::prelude::*;

        let name = "[A-Z_][A-Z0-9_-]{0,8}";
        proptest::prop_oneof![
            name.prop_filter("character literal head", |name| name != CODE_CHAR)
                .prop_map(Symbol::bare),
            name.prop_map(Symbol::keyword),
            (name, name).prop_map(|(package, name)| Symbol::qualified(package, name)),
        ]
        .boxed()
    }
}
