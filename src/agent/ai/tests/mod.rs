use crate::game_repr::square::parse_square;

mod move_ordering_tests;

pub fn sq(name: &str) -> usize {
    parse_square(name).unwrap_or_else(|| panic!("bad square name {name}"))
}
