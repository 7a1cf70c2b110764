#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;

use super::*;
use crate::ScalarSlot;

// A two-case sum with hand-written case builders.

#[derive(Clone, Debug, PartialEq)]
enum Shape {
    Circle { radius: u32 },
    Empty,
}

struct ShapeCircleBuilder {
    radius: ScalarSlot<u32>,
}

impl Default for ShapeCircleBuilder {
    fn default() -> Self {
        ShapeCircleBuilder {
            radius: ScalarSlot::new("radius"),
        }
    }
}

#[derive(Default)]
struct ShapeEmptyBuilder;

enum ShapeCaseSelector {
    Circle(ShapeCircleBuilder),
    Empty(ShapeEmptyBuilder),
}

impl CaseSet for ShapeCaseSelector {
    type Output = Shape;

    const TARGET: &'static str = "Shape";

    fn case_name(&self) -> &'static str {
        match self {
            ShapeCaseSelector::Circle(_) => "Circle",
            ShapeCaseSelector::Empty(_) => "Empty",
        }
    }

    fn build(&self) -> Result<Shape, BuildError> {
        match self {
            ShapeCaseSelector::Circle(b) => Ok(Shape::Circle {
                radius: b.radius.build()?,
            }),
            ShapeCaseSelector::Empty(_) => Ok(Shape::Empty),
        }
    }
}

impl CaseOf<ShapeCaseSelector> for ShapeCircleBuilder {
    fn wrap(self) -> ShapeCaseSelector {
        ShapeCaseSelector::Circle(self)
    }

    fn project(case: &ShapeCaseSelector) -> Option<&Self> {
        match case {
            ShapeCaseSelector::Circle(b) => Some(b),
            ShapeCaseSelector::Empty(_) => None,
        }
    }

    fn select(active: &mut Option<ShapeCaseSelector>) -> &mut Self {
        if let Some(ShapeCaseSelector::Circle(ref mut b)) = *active {
            return b;
        }
        *active = Some(ShapeCaseSelector::Circle(Self::default()));
        Self::select(active)
    }
}

impl CaseOf<ShapeCaseSelector> for ShapeEmptyBuilder {
    fn wrap(self) -> ShapeCaseSelector {
        ShapeCaseSelector::Empty(self)
    }

    fn project(case: &ShapeCaseSelector) -> Option<&Self> {
        match case {
            ShapeCaseSelector::Empty(b) => Some(b),
            ShapeCaseSelector::Circle(_) => None,
        }
    }

    fn select(active: &mut Option<ShapeCaseSelector>) -> &mut Self {
        if let Some(ShapeCaseSelector::Empty(ref mut b)) = *active {
            return b;
        }
        *active = Some(ShapeCaseSelector::Empty(Self::default()));
        Self::select(active)
    }
}

#[test]
fn untagged_selector_fails_to_build() {
    let selector: Selector<ShapeCaseSelector> = Selector::new();
    assert!(!selector.is_selected());
    assert_eq!(selector.selected_case(), None);
    assert_eq!(
        selector.build(),
        Err(BuildError::NoCaseSelected { target: "Shape" })
    );
}

#[test]
fn select_tags_and_returns_same_builder() {
    let mut selector: Selector<ShapeCaseSelector> = Selector::default();
    selector.select::<ShapeCircleBuilder>().radius.set(3);
    // Second access keeps the existing builder.
    assert_eq!(selector.select::<ShapeCircleBuilder>().radius.get(), Some(&3));
    assert_eq!(selector.selected_case(), Some("Circle"));
    assert_eq!(selector.build(), Ok(Shape::Circle { radius: 3 }));
}

#[test]
fn switching_case_discards_previous_builder() {
    let mut selector: Selector<ShapeCaseSelector> = Selector::new();
    selector.select::<ShapeCircleBuilder>().radius.set(3);
    selector.select::<ShapeEmptyBuilder>();
    assert!(selector.get::<ShapeCircleBuilder>().is_none());
    assert_eq!(selector.build(), Ok(Shape::Empty));

    // Reselecting starts fresh.
    let circle = selector.select::<ShapeCircleBuilder>();
    assert!(!circle.radius.is_set());
    assert_eq!(
        selector.build(),
        Err(BuildError::FieldNotSet { field: "radius" })
    );
}

#[test]
fn replace_returns_previous_case() {
    let mut selector: Selector<ShapeCaseSelector> = Selector::new();
    assert!(selector.replace(ShapeEmptyBuilder).is_none());

    let mut circle = ShapeCircleBuilder::default();
    circle.radius.set(9);
    let previous = selector.replace(circle).unwrap();
    assert_eq!(previous.case_name(), "Empty");
    assert_eq!(selector.get::<ShapeCircleBuilder>().unwrap().radius.get(), Some(&9));
}

#[test]
fn clear_returns_to_untagged() {
    let mut selector: Selector<ShapeCaseSelector> = Selector::new();
    selector.set(ShapeCaseSelector::Empty(ShapeEmptyBuilder));
    assert!(selector.active().is_some());
    assert!(selector.clear().is_some());
    assert!(!selector.is_selected());
    assert!(selector.clear().is_none());
}
