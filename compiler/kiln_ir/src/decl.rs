//! Normalized declaration model.
//!
//! This is the input boundary of the pipeline. A host parser splits a
//! declaration into members (records) or cases (sum types) and hands the
//! result over; Kiln never looks at source text itself.

use std::fmt;

use crate::TypeRef;

/// A declaration handed to the analyzer.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Declaration {
    /// A product type with named (or positional) fields.
    Record(RecordDecl),
    /// A closed set of cases, each with its own payload.
    Sum(SumDecl),
    /// Any other kind of declaration. Always rejected by analysis.
    Unsupported(UnsupportedDecl),
}

impl Declaration {
    /// The declared type name.
    pub fn name(&self) -> &str {
        match self {
            Declaration::Record(record) => &record.name,
            Declaration::Sum(sum) => &sum.name,
            Declaration::Unsupported(other) => &other.name,
        }
    }
}

/// A record declaration: an ordered list of member declarations.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct RecordDecl {
    pub name: String,
    pub members: Vec<MemberDecl>,
}

/// One member declaration of a record.
///
/// A single member can introduce several bindings: `var a, b: Int`
/// declares two fields sharing one annotation, and `let (x, y): (A, B)`
/// declares a grouped pair.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct MemberDecl {
    pub bindings: Vec<Binding>,
    /// Declared immutable (`let`-style).
    pub is_constant: bool,
    /// Type-level member; never part of an instance.
    pub is_static: bool,
    /// The member's type is itself buildable and should get a sub-builder.
    pub buildable: bool,
}

impl MemberDecl {
    /// A single mutable member with a type annotation.
    pub fn field(name: impl Into<String>, ty: TypeRef) -> Self {
        MemberDecl {
            bindings: vec![Binding::new(BindingPattern::Name(name.into()), Some(ty))],
            is_constant: false,
            is_static: false,
            buildable: false,
        }
    }

    /// A single positional member (tuple-struct field).
    pub fn positional(ty: TypeRef) -> Self {
        MemberDecl {
            bindings: vec![Binding::new(BindingPattern::Positional, Some(ty))],
            is_constant: false,
            is_static: false,
            buildable: false,
        }
    }

    /// A member made of several bindings.
    pub fn multi(bindings: Vec<Binding>) -> Self {
        MemberDecl {
            bindings,
            is_constant: false,
            is_static: false,
            buildable: false,
        }
    }

    #[must_use]
    pub fn constant(mut self) -> Self {
        self.is_constant = true;
        self
    }

    #[must_use]
    pub fn static_member(mut self) -> Self {
        self.is_static = true;
        self
    }

    #[must_use]
    pub fn buildable(mut self) -> Self {
        self.buildable = true;
        self
    }

    /// Attach a literal default to every binding of this member.
    #[must_use]
    pub fn with_default(mut self, literal: Literal) -> Self {
        for binding in &mut self.bindings {
            binding.default = Some(literal.clone());
        }
        self
    }
}

/// One binding inside a member declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Binding {
    pub pattern: BindingPattern,
    /// Type annotation, `None` when the declaration relies on inference.
    pub ty: Option<TypeRef>,
    /// Literal initializer, if any.
    pub default: Option<Literal>,
}

impl Binding {
    pub fn new(pattern: BindingPattern, ty: Option<TypeRef>) -> Self {
        Binding {
            pattern,
            ty,
            default: None,
        }
    }

    /// A named binding.
    pub fn named(name: impl Into<String>, ty: Option<TypeRef>) -> Self {
        Self::new(BindingPattern::Name(name.into()), ty)
    }

    #[must_use]
    pub fn with_default(mut self, literal: Literal) -> Self {
        self.default = Some(literal);
        self
    }
}

/// The left-hand side of a binding.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum BindingPattern {
    /// `name`
    Name(String),
    /// `(a, b)`; elements pair positionally with a tuple annotation.
    Tuple(Vec<BindingPattern>),
    /// An unlabeled slot, named by its position.
    Positional,
    /// `_`; binds nothing.
    Wildcard,
}

/// A sum-type declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SumDecl {
    pub name: String,
    pub cases: Vec<CaseDecl>,
}

/// One case of a sum type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CaseDecl {
    pub name: String,
    pub payload: Vec<PayloadDecl>,
}

impl CaseDecl {
    /// A case without payload.
    pub fn unit(name: impl Into<String>) -> Self {
        CaseDecl {
            name: name.into(),
            payload: Vec::new(),
        }
    }

    /// A case with payload slots.
    pub fn new(name: impl Into<String>, payload: Vec<PayloadDecl>) -> Self {
        CaseDecl {
            name: name.into(),
            payload,
        }
    }
}

/// One payload slot of a case.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct PayloadDecl {
    /// Explicit label, `None` for positional slots.
    pub label: Option<String>,
    pub ty: Option<TypeRef>,
    pub buildable: bool,
}

impl PayloadDecl {
    /// A labeled payload slot.
    pub fn labeled(label: impl Into<String>, ty: TypeRef) -> Self {
        PayloadDecl {
            label: Some(label.into()),
            ty: Some(ty),
            buildable: false,
        }
    }

    /// An unlabeled payload slot.
    pub fn positional(ty: TypeRef) -> Self {
        PayloadDecl {
            label: None,
            ty: Some(ty),
            buildable: false,
        }
    }

    #[must_use]
    pub fn buildable(mut self) -> Self {
        self.buildable = true;
        self
    }
}

/// A declaration kind Kiln does not generate builders for.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct UnsupportedDecl {
    pub name: String,
    /// Human-readable kind, e.g. `"union"`.
    pub kind: String,
}

/// A literal initializer.
///
/// Numbers keep their source text so suffixes (`5u8`) survive.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Literal {
    Bool(bool),
    Int(String),
    Float(String),
    Str(String),
    Char(char),
}

impl Literal {
    /// Whether this is a string literal.
    pub fn is_str(&self) -> bool {
        matches!(self, Literal::Str(_))
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Bool(value) => write!(f, "{value}"),
            Literal::Int(text) | Literal::Float(text) => f.write_str(text),
            Literal::Str(value) => write!(f, "{value:?}"),
            Literal::Char(value) => write!(f, "{value:?}"),
        }
    }
}
