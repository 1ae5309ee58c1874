//! Key codes and the navigation they map to inside the calendar grid.

/// Keys the picker reacts to, decoded from DOM-style key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Tab,
    Escape,
    Space,
    PageUp,
    PageDown,
    End,
    Home,
    Left,
    Up,
    Right,
    Down,
    Other(u32),
}

impl Key {
    pub fn from_key_code(code: u32) -> Self {
        match code {
            9 => Key::Tab,
            27 => Key::Escape,
            32 => Key::Space,
            33 => Key::PageUp,
            34 => Key::PageDown,
            35 => Key::End,
            36 => Key::Home,
            37 => Key::Left,
            38 => Key::Up,
            39 => Key::Right,
            40 => Key::Down,
            other => Key::Other(other),
        }
    }
}

/// A focused-day movement requested by the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Days(i64),
    Months(i32),
    Years(i32),
    StartOfWeek,
    EndOfWeek,
}

/// Grid navigation for `key`; `None` leaves the key to default handling.
pub fn navigation_for(key: Key, shift: bool) -> Option<Navigation> {
    let nav = match key {
        Key::Right => Navigation::Days(1),
        Key::Left => Navigation::Days(-1),
        Key::Down => Navigation::Days(7),
        Key::Up => Navigation::Days(-7),
        Key::PageUp if shift => Navigation::Years(-1),
        Key::PageUp => Navigation::Months(-1),
        Key::PageDown if shift => Navigation::Years(1),
        Key::PageDown => Navigation::Months(1),
        Key::Home => Navigation::StartOfWeek,
        Key::End => Navigation::EndOfWeek,
        _ => return None,
    };
    Some(nav)
}
