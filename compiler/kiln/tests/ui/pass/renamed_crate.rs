//! The runtime reached through another path.

mod support {
    pub use kiln::*;
}

#[derive(kiln::Builder)]
#[builder(crate = crate::support, name = PointFactory)]
pub struct Point(i32, i32);

fn main() {
    let mut factory = PointFactory::new();
    factory.index_0(1).index_1(2);
    let point = factory.build();
    assert!(point.is_ok());
}
