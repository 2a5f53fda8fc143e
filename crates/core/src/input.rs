bitflags::bitflags! {
    #[repr(transparent)]
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Controls: u8 {
        const MOVE_LEFT  = 1 << 0;
        const MOVE_RIGHT = 1 << 1;
        const JUMP       = 1 << 2;
    }
}

/// A logical control the simulation reads.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    MoveLeft,
    MoveRight,
    Jump,
}

impl Control {
    pub const ALL: [Control; 3] = [Control::MoveLeft, Control::MoveRight, Control::Jump];

    pub fn name(self) -> &'static str {
        match self {
            Control::MoveLeft => "move-left",
            Control::MoveRight => "move-right",
            Control::Jump => "jump",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Control::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Maps a keyboard `code` (as in `KeyboardEvent.code`) to a control.
    pub fn from_key(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" => Some(Control::MoveLeft),
            "ArrowRight" => Some(Control::MoveRight),
            "Space" => Some(Control::Jump),
            _ => None,
        }
    }

    fn flag(self) -> Controls {
        match self {
            Control::MoveLeft => Controls::MOVE_LEFT,
            Control::MoveRight => Controls::MOVE_RIGHT,
            Control::Jump => Controls::JUMP,
        }
    }
}

/// Which controls are currently held. Last write wins per control; nothing
/// is buffered between ticks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InputState {
    held: Controls,
}

impl Default for InputState {
    fn default() -> Self {
        Self { held: Controls::empty() }
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unknown bits are dropped.
    pub fn from_bits(bits: u8) -> Self {
        Self { held: Controls::from_bits_truncate(bits) }
    }

    pub fn bits(&self) -> u8 {
        self.held.bits()
    }

    pub fn set(&mut self, control: Control, pressed: bool) {
        self.held.set(control.flag(), pressed);
    }

    pub fn is_pressed(&self, control: Control) -> bool {
        self.held.contains(control.flag())
    }

    /// Unrecognized names are ignored.
    pub fn set_named(&mut self, name: &str, pressed: bool) {
        if let Some(control) = Control::from_name(name) {
            self.set(control, pressed);
        }
    }

    pub fn key_down(&mut self, code: &str) {
        if let Some(control) = Control::from_key(code) {
            self.set(control, true);
        }
    }

    pub fn key_up(&mut self, code: &str) {
        if let Some(control) = Control::from_key(code) {
            self.set(control, false);
        }
    }
}
