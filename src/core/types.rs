//! Core type definitions used throughout the codebase

use std::fmt;

/// Abstract pad buttons, not tied to a concrete device layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Button {
    Cross = 0,
    Up = 1,
    Circle = 2,
    Right = 3,
    Square = 4,
    Down = 5,
    Triangle = 6,
    Left = 7,
}

impl Button {
    pub const ALL: [Button; 8] = [
        Button::Cross,
        Button::Up,
        Button::Circle,
        Button::Right,
        Button::Square,
        Button::Down,
        Button::Triangle,
        Button::Left,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Button::Cross => "CROSS",
            Button::Up => "UP",
            Button::Circle => "CIRCLE",
            Button::Right => "RIGHT",
            Button::Square => "SQUARE",
            Button::Down => "DOWN",
            Button::Triangle => "TRIANGLE",
            Button::Left => "LEFT",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of pressed (or required) buttons
///
/// Backed by a bit mask, so copies are cheap and equality is set equality.
/// The empty set is the requirement of the cool-down task.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ButtonSet(u8);

impl ButtonSet {
    pub const EMPTY: ButtonSet = ButtonSet(0);

    pub fn new() -> Self {
        Self::EMPTY
    }

    pub fn insert(&mut self, button: Button) {
        self.0 |= button.bit();
    }

    pub fn remove(&mut self, button: Button) {
        self.0 &= !button.bit();
    }

    pub fn with(mut self, button: Button) -> Self {
        self.insert(button);
        self
    }

    pub fn contains(&self, button: Button) -> bool {
        self.0 & button.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Buttons in declaration order
    pub fn iter(&self) -> impl Iterator<Item = Button> + '_ {
        Button::ALL.into_iter().filter(move |b| self.contains(*b))
    }
}

impl FromIterator<Button> for ButtonSet {
    fn from_iter<I: IntoIterator<Item = Button>>(iter: I) -> Self {
        let mut set = ButtonSet::new();
        for button in iter {
            set.insert(button);
        }
        set
    }
}

impl<const N: usize> From<[Button; N]> for ButtonSet {
    fn from(buttons: [Button; N]) -> Self {
        buttons.into_iter().collect()
    }
}

impl fmt::Display for ButtonSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(|b| b.name()).collect();
        write!(f, "{}", names.join(", "))
    }
}

impl fmt::Debug for ButtonSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_equality_ignores_insertion_order() {
        let a = ButtonSet::from([Button::Cross, Button::Up]);
        let b = ButtonSet::from([Button::Up, Button::Cross]);
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = ButtonSet::new();
        set.insert(Button::Left);
        set.insert(Button::Left);
        assert_eq!(set.len(), 1);
        assert!(set.contains(Button::Left));
        assert!(!set.contains(Button::Right));
    }

    #[test]
    fn test_remove() {
        let mut set = ButtonSet::from([Button::Square, Button::Down]);
        set.remove(Button::Square);
        assert_eq!(set, ButtonSet::from([Button::Down]));
        set.remove(Button::Down);
        assert!(set.is_empty());
        assert_eq!(set, ButtonSet::EMPTY);
    }

    #[test]
    fn test_display_uses_declaration_order() {
        let set = ButtonSet::from([Button::Left, Button::Cross, Button::Circle]);
        assert_eq!(set.to_string(), "CROSS, CIRCLE, LEFT");
        assert_eq!(format!("{:?}", set), "{CROSS, CIRCLE, LEFT}");
        assert_eq!(ButtonSet::EMPTY.to_string(), "");
    }

    #[test]
    fn test_all_buttons_have_distinct_bits() {
        let full: ButtonSet = Button::ALL.into_iter().collect();
        assert_eq!(full.len(), 8);
    }
}
