//! Generic parameters, lifetimes and where clauses carry over to the builder.

use std::fmt::Debug;

use kiln::Builder;

#[derive(Builder, Debug, Clone)]
pub struct Tagged<'a, T: Debug, const N: usize>
where
    T: PartialEq,
{
    tag: &'a str,
    value: T,
    history: Vec<T>,
    grid: [u8; N],
}

fn main() {
    let mut builder: TaggedBuilder<'_, i64, 2> = TaggedBuilder::new();
    builder.tag("t").value(1).push_history(0).grid([0, 1]);
    let tagged = builder.build();
    assert!(tagged.is_ok());
}
