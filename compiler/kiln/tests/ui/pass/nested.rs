//! Nested builders edited in place.

use kiln::Builder;

#[derive(Builder, Debug, Clone, PartialEq)]
pub struct Engine {
    power: u32,
}

#[derive(Builder, Debug, Clone, PartialEq)]
pub struct Car {
    #[builder(nested)]
    engine: Engine,
    #[builder(nested)]
    spare: Option<Engine>,
}

fn main() {
    let mut car = CarBuilder::new();
    car.engine_builder().power(120);
    car.spare_builder().power(60);
    assert_eq!(
        car.build(),
        Ok(Car {
            engine: Engine { power: 120 },
            spare: Some(Engine { power: 60 }),
        })
    );
}
