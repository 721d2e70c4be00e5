//! Input events: [`Msg`] and [`Key`].
//!
//! Everything here is plain data. Pointer positions arrive already
//! translated to board coordinates by the driver; the core never sees
//! device or terminal coordinates.

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// A keyboard key, reduced to the bindings the application uses.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    Space,
    Enter,
    Escape,
    /// A printable character.
    Char(char),
}

// ---------------------------------------------------------------------------
// Msg
// ---------------------------------------------------------------------------

/// An input message delivered to the application model.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Msg {
    /// Sent once when the application starts.
    Init,
    /// A key was pressed.
    Key(Key),
    /// Pointer request to flip one board cell.
    ToggleCell { row: usize, col: usize },
    /// A scheduled timer tick, tagged with the generation it was scheduled
    /// for so the model can discard ticks that outlived a pause or reseed.
    Tick { generation: u64 },
    /// The display surface changed; the next frame repaints fully.
    Redraw,
    /// Driver-initiated shutdown request.
    Quit,
}
