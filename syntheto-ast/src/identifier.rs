use crate::protocol::{FormReader, FormWriter, FromSexpr, Maker, ToSexpr};
use crate::DecodeError;
use acl2_sexpr::Value;
use smol_str::SmolStr;
use std::fmt;

/// A name: a letter or `_`, followed by letters, digits and `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier {
    name: SmolStr,
}

impl Identifier {
    pub fn new(name: impl Into<SmolStr>) -> Result<Self, DecodeError> {
        let name = name.into();
        if !is_valid(&name) {
            return Err(DecodeError::value_constraint(
                "identifier",
                format!("{name:?} is not a valid identifier"),
            ));
        }
        Ok(Self { name })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the maker function that constructs this node.
    pub fn maker(&self) -> &'static str {
        Self::MAKER
    }
}

fn is_valid(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

impl Maker for Identifier {
    const MAKER: &'static str = "MAKE-IDENTIFIER";
}

impl ToSexpr for Identifier {
    fn to_sexpr(&self) -> Value {
        FormWriter::new(Self::MAKER).field("NAME", &self.name).finish()
    }
}

impl FromSexpr for Identifier {
    fn from_sexpr(value: &Value) -> Result<Self, DecodeError> {
        let mut form = FormReader::open(value, Self::MAKER, 1)?;
        let name: SmolStr = form.field("NAME")?;
        form.finish()?;
        Identifier::new(name).map_err(|err| err.within(Self::MAKER, "NAME"))
    }
}

/// Displays the bare name.
impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod test {
    use super::Identifier;
    use crate::protocol::{FromSexpr, ToSexpr};
    use crate::DecodeError;
    use acl2_sexpr::from_str;
    use rstest::rstest;

    #[rstest]
    #[case("x")]
    #[case("_tmp")]
    #[case("List_2")]
    fn test_valid(#[case] name: &str) {
        let identifier = Identifier::new(name).unwrap();
        assert_eq!(name, identifier.to_string());
        let decoded = Identifier::from_sexpr(&identifier.to_sexpr()).unwrap();
        assert_eq!(identifier, decoded);
    }

    #[rstest]
    #[case("")]
    #[case("1x")]
    #[case("a-b")]
    #[case("a b")]
    fn test_invalid(#[case] name: &str) {
        let err = Identifier::new(name).unwrap_err();
        assert!(matches!(err, DecodeError::ValueConstraint { .. }), "{err:?}");
    }

    #[test]
    fn test_wire_form() {
        let identifier = Identifier::new("fib").unwrap();
        assert_eq!(
            "(SYNTHETO::MAKE-IDENTIFIER :NAME \"fib\")",
            identifier.to_sexpr().to_string()
        );
    }

    #[test]
    fn test_invalid_name_in_form() {
        let value = from_str("(SYNTHETO::MAKE-IDENTIFIER :NAME \"9lives\")").unwrap();
        let err = Identifier::from_sexpr(&value).unwrap_err();
        assert_eq!(vec!["NAME"], err.path());
        assert!(matches!(err.innermost(), DecodeError::ValueConstraint { .. }));
    }
}
