use bitflags::bitflags;

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Buttons: u16 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const A = 1 << 2;
        const B = 1 << 3;
        const L = 1 << 4;
        const R = 1 << 5;
        const SELECT = 1 << 6;
        const LEFT = 1 << 7;
        const RIGHT = 1 << 8;
        const X = 1 << 9;
        const Y = 1 << 10;
    }
}

pub const BUTTON_COUNT: usize = 11;

impl Buttons {
    fn slot(self) -> usize {
        self.bits().trailing_zeros() as usize
    }

    pub fn parse_name(name: &str) -> Option<Self> {
        Some(match name.to_ascii_lowercase().as_str() {
            "up" | "u" => Buttons::UP,
            "down" | "d" => Buttons::DOWN,
            "left" => Buttons::LEFT,
            "right" => Buttons::RIGHT,
            "a" => Buttons::A,
            "b" => Buttons::B,
            "x" => Buttons::X,
            "y" => Buttons::Y,
            "l" => Buttons::L,
            "r" => Buttons::R,
            "select" | "s" => Buttons::SELECT,
            _ => return None,
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonState {
    #[default]
    Released,
    JustPressed,
    Pressed,
    JustReleased,
}

impl ButtonState {
    pub fn next(self, down: bool) -> Self {
        match (self, down) {
            (ButtonState::Released | ButtonState::JustReleased, true) => ButtonState::JustPressed,
            (ButtonState::JustPressed | ButtonState::Pressed, true) => ButtonState::Pressed,
            (ButtonState::JustPressed | ButtonState::Pressed, false) => ButtonState::JustReleased,
            (ButtonState::Released | ButtonState::JustReleased, false) => ButtonState::Released,
        }
    }

    pub fn is_down(self) -> bool {
        matches!(self, ButtonState::JustPressed | ButtonState::Pressed)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub pressed: Buttons,
    pub released: Buttons,
}

impl FrameInput {
    pub fn released(&self, button: Buttons) -> bool {
        self.released.contains(button)
    }

    pub fn changed(&self) -> bool {
        !(self.pressed | self.released).is_empty()
    }
}

#[derive(Clone, Debug, Default)]
pub struct InputTracker {
    states: [ButtonState; BUTTON_COUNT],
}

impl InputTracker {
    // advances every button by one frame
    pub fn sample(&mut self, levels: Buttons) -> FrameInput {
        let mut frame = FrameInput::default();
        for button in Buttons::all().iter() {
            let state = &mut self.states[button.slot()];
            *state = state.next(levels.contains(button));
            match *state {
                ButtonState::JustPressed => frame.pressed |= button,
                ButtonState::JustReleased => frame.released |= button,
                _ => {}
            }
        }
        frame
    }

    #[cfg(test)]
    fn state(&self, button: Buttons) -> ButtonState {
        self.states[button.slot()]
    }

    #[cfg(test)]
    fn held(&self) -> Buttons {
        Buttons::all()
            .iter()
            .filter(|b| self.states[b.slot()].is_down())
            .fold(Buttons::empty(), |acc, b| acc | b)
    }
}
