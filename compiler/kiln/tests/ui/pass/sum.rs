//! An enum with named, positional and empty cases.

use kiln::Builder;

#[derive(Builder, Debug, Clone, PartialEq)]
pub enum Event {
    Key { code: u32, repeat: bool },
    Resize(u16, u16),
    Quit,
}

fn main() {
    let mut builder = EventBuilder::new();
    builder.key().code(13).repeat(false);
    builder.resize().index_0(80).index_1(24);
    assert_eq!(builder.build(), Ok(Event::Resize(80, 24)));

    let _: EventKeyBuilder = EventKeyBuilder::new();
    let _: Option<&'static str> = builder.selected_case();
}
