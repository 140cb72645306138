/// The logical keys the engine understands.
///
/// Platform event sources deliver raw key codes; [`Key::from_code`] maps
/// them onto this set. Codes outside the map are ignored by the input
/// state, so a game can never observe a key it has no name for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Space,
    Escape,
    W,
    S,
}

/// Raw code per logical key. The values are DOM `keyCode`s, matching the
/// event bridge convention used by web hosts.
const KEY_MAP: [(Key, u32); 8] = [
    (Key::Up, 38),
    (Key::Down, 40),
    (Key::Left, 37),
    (Key::Right, 39),
    (Key::Space, 32),
    (Key::Escape, 27),
    (Key::W, 87),
    (Key::S, 83),
];

impl Key {
    /// Map a raw platform key code to a logical key, if one is bound.
    pub fn from_code(code: u32) -> Option<Key> {
        KEY_MAP.iter().find(|(_, c)| *c == code).map(|(k, _)| *k)
    }

    /// The raw platform code this key is bound to.
    pub fn code(self) -> u32 {
        // Every variant is present in KEY_MAP.
        KEY_MAP.iter().find(|(k, _)| *k == self).map(|(_, c)| *c).unwrap_or(0)
    }
}
