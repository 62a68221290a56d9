//! Lookup from maker symbols to node decoders.
//!
//! The registry is built on first use and shared for the lifetime of the
//! process. Every node kind and every outcome is registered under its
//! maker symbol, so any maker form can be decoded without knowing in advance
//! what kind of node it is.
use crate::protocol::{self, Family, FromSexpr, Maker};
use crate::{node, DecodeError, Node};
use acl2_sexpr::{Symbol, Value};
use std::collections::HashMap;
use std::sync::OnceLock;

type NodeDecoder = Box<dyn Fn(&Value) -> Result<Node, DecodeError> + Send + Sync>;

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Maps maker symbols to the decoder of the node kind they construct.
pub struct Registry {
    decoders: HashMap<Symbol, NodeDecoder>,
}

impl Registry {
    fn new() -> Self {
        let mut registry = Registry {
            decoders: HashMap::new(),
        };
        node::register_all(&mut registry);
        tracing::debug!(kinds = registry.len(), "built node registry");
        registry
    }

    fn insert(&mut self, maker: &'static str, decoder: NodeDecoder) {
        if self
            .decoders
            .insert(protocol::maker_symbol(maker), decoder)
            .is_some()
        {
            tracing::warn!(maker, "maker registered twice, keeping the last decoder");
        }
    }

    /// Register a standalone node kind.
    pub(crate) fn register<K>(&mut self)
    where
        K: Maker + FromSexpr + 'static,
        Node: From<K>,
    {
        self.insert(
            K::MAKER,
            Box::new(|value: &Value| K::from_sexpr(value).map(Node::from)),
        );
    }

    /// Register every member of a family.
    pub(crate) fn register_family<F>(&mut self)
    where
        F: Family,
        Node: From<F>,
    {
        for (maker, decoder) in F::decoders() {
            self.insert(
                maker,
                Box::new(move |value: &Value| decoder(value).map(Node::from)),
            );
        }
    }

    pub fn contains(&self, maker: &Symbol) -> bool {
        self.decoders.contains_key(maker)
    }

    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }

    /// Every registered maker symbol, in no particular order.
    pub fn makers(&self) -> impl Iterator<Item = &Symbol> {
        self.decoders.keys()
    }

    /// Decode a maker form into the node it constructs.
    pub fn build(&self, value: &Value) -> Result<Node, DecodeError> {
        let Some((Value::Symbol(head), _)) = value.as_list().and_then(<[Value]>::split_first)
        else {
            return Err(DecodeError::shape(
                "node",
                format!("expected a maker form, found {} `{}`", value.kind(), value),
            ));
        };

        let Some(decoder) = self.decoders.get(head) else {
            tracing::debug!(maker = %head, "no decoder registered");
            return Err(DecodeError::UnknownMaker(head.clone()));
        };

        tracing::trace!(maker = %head, "decoding node");
        decoder(value)
    }
}

/// The process-wide registry.
pub fn registry() -> &'static Registry {
    REGISTRY.get_or_init(Registry::new)
}

/// Decode a maker form of any registered kind.
pub fn build(value: &Value) -> Result<Node, DecodeError> {
    registry().build(value)
}

#[cfg(test)]
mod test {
    use super::{build, registry};
    use crate::protocol::{maker_symbol, Family, PACKAGE};
    use crate::{
        DecodeError, Expression, FunctionDefiner, FunctionSpecifier, Literal, Node, Outcome,
        Quantifier, ToSexpr, TopLevel, TransformArgumentValue, Type, TypeDefiner,
    };
    use acl2_sexpr::from_str;
    use rstest::rstest;
    use std::collections::HashSet;

    fn family_makers<F: Family>() -> Vec<&'static str> {
        F::decoders().into_iter().map(|(maker, _)| maker).collect()
    }

    #[test]
    fn test_size() {
        // 72 node kinds and 9 outcomes
        assert_eq!(81, registry().len());
        assert!(!registry().is_empty());
    }

    #[test]
    fn test_family_makers_are_registered() {
        let makers = [
            family_makers::<Expression>(),
            family_makers::<FunctionDefiner>(),
            family_makers::<FunctionSpecifier>(),
            family_makers::<Literal>(),
            family_makers::<Outcome>(),
            family_makers::<Quantifier>(),
            family_makers::<TopLevel>(),
            family_makers::<TransformArgumentValue>(),
            family_makers::<Type>(),
            family_makers::<TypeDefiner>(),
        ]
        .concat();
        assert_eq!(62, makers.len());

        let unique: HashSet<&str> = makers.iter().copied().collect();
        assert_eq!(makers.len(), unique.len());

        for maker in makers {
            assert!(registry().contains(&maker_symbol(maker)), "{maker}");
        }
    }

    #[test]
    fn test_makers_are_qualified() {
        for symbol in registry().makers() {
            assert_eq!(Some(PACKAGE), symbol.package());
            assert!(symbol.name().starts_with("MAKE-"), "{symbol}");
        }
    }

    #[rstest]
    #[case("(SYNTHETO::MAKE-TYPE-BOOLEAN)")]
    #[case("(SYNTHETO::MAKE-IDENTIFIER :NAME \"x\")")]
    #[case("(SYNTHETO::MAKE-OUTCOME-TYPE-SUCCESS :MESSAGE \"positive\")")]
    #[case("(SYNTHETO::MAKE-TYPE-SUM :ALTERNATIVES (LIST))")]
    fn test_build(#[case] source: &str) {
        let value = from_str(source).unwrap();
        let node = build(&value).unwrap();
        assert_eq!(value, node.to_sexpr());
    }

    #[test]
    fn test_build_outcome() {
        let value = from_str("(SYNTHETO::MAKE-OUTCOME-THEOREM-FAILURE :MESSAGE \"abcd\")").unwrap();
        let Node::Outcome(outcome) = build(&value).unwrap() else {
            panic!("outcome not decoded as outcome");
        };
        assert_eq!("abcd", outcome.message());
    }

    #[rstest]
    #[case("(SYNTHETO::MAKE-NOTHING)")]
    #[case("(MAKE-TYPE-BOOLEAN)")]
    #[case("(ACL2::MAKE-TYPE-BOOLEAN)")]
    #[case("(SYNTHETO::MAKE-BINARY-OP-LT)")]
    fn test_unknown_maker(#[case] source: &str) {
        let err = build(&from_str(source).unwrap()).unwrap_err();
        assert!(matches!(err, DecodeError::UnknownMaker(_)), "{err:?}");
    }

    #[rstest]
    #[case("NIL")]
    #[case("()")]
    #[case("42")]
    #[case("(\"MAKE-TYPE-BOOLEAN\")")]
    fn test_not_a_form(#[case] source: &str) {
        let err = build(&from_str(source).unwrap()).unwrap_err();
        assert!(matches!(err, DecodeError::Shape { .. }), "{err:?}");
    }
}
