//! `#[builder(...)]` attribute parsing.

use kiln_ir::Literal;
use syn::{Attribute, Expr, ExprLit, ExprUnary, Ident, Lit, LitStr, Path, UnOp};

/// Container-level options.
#[derive(Default)]
pub(crate) struct ContainerAttrs {
    /// `name = FooFactory`
    pub name: Option<Ident>,
    /// `crate = path::to::kiln`
    pub krate: Option<Path>,
}

impl ContainerAttrs {
    pub(crate) fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = ContainerAttrs::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident("builder")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    if out.name.is_some() {
                        return Err(meta.error("duplicate `name` option"));
                    }
                    out.name = Some(meta.value()?.parse()?);
                    Ok(())
                } else if meta.path.is_ident("crate") {
                    if out.krate.is_some() {
                        return Err(meta.error("duplicate `crate` option"));
                    }
                    let value = meta.value()?;
                    // Accept both `crate = path` and `crate = "path"`.
                    let path = if value.peek(LitStr) {
                        value.parse::<LitStr>()?.parse()?
                    } else {
                        value.parse()?
                    };
                    out.krate = Some(path);
                    Ok(())
                } else if meta.path.is_ident("nested") || meta.path.is_ident("constant") {
                    Err(meta.error("this option belongs on a field, not on the type"))
                } else {
                    Err(meta.error("unknown builder option; expected `name` or `crate`"))
                }
            })?;
        }
        Ok(out)
    }
}

/// Field- and payload-level options.
#[derive(Default)]
pub(crate) struct FieldAttrs {
    /// `nested`
    pub nested: bool,
    /// `constant = <literal>`
    pub constant: Option<Literal>,
}

impl FieldAttrs {
    pub(crate) fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = FieldAttrs::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident("builder")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("nested") {
                    out.nested = true;
                    Ok(())
                } else if meta.path.is_ident("constant") {
                    if out.constant.is_some() {
                        return Err(meta.error("duplicate `constant` option"));
                    }
                    let expr: Expr = meta.value()?.parse()?;
                    out.constant = Some(literal(&expr)?);
                    Ok(())
                } else if meta.path.is_ident("name") || meta.path.is_ident("crate") {
                    Err(meta.error("this option belongs on the type, not on a field"))
                } else {
                    Err(meta.error("unknown builder option; expected `nested` or `constant`"))
                }
            })?;
        }
        Ok(out)
    }
}

/// Convert a literal expression, allowing a leading minus on numbers.
fn literal(expr: &Expr) -> syn::Result<Literal> {
    match expr {
        Expr::Lit(ExprLit { lit, .. }) => match lit {
            Lit::Str(s) => Ok(Literal::Str(s.value())),
            Lit::Int(i) => Ok(Literal::Int(i.to_string())),
            Lit::Float(f) => Ok(Literal::Float(f.to_string())),
            Lit::Bool(b) => Ok(Literal::Bool(b.value)),
            Lit::Char(c) => Ok(Literal::Char(c.value())),
            other => Err(syn::Error::new_spanned(
                other,
                "unsupported constant; expected a string, number, bool or char literal",
            )),
        },
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr: inner,
            ..
        }) => match literal(inner)? {
            Literal::Int(text) => Ok(Literal::Int(format!("-{text}"))),
            Literal::Float(text) => Ok(Literal::Float(format!("-{text}"))),
            _ => Err(syn::Error::new_spanned(expr, "only numbers can be negated")),
        },
        other => Err(syn::Error::new_spanned(other, "constant must be a literal")),
    }
}
