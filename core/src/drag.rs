#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragSession {
    pub previous_x: f64,
    pub delta_x: f64,
    pub active: bool,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DragTracker {
    session: DragSession,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> DragSession {
        self.session
    }

    pub fn is_active(&self) -> bool {
        self.session.active
    }

    pub fn start(&mut self, x: f64) {
        self.session = DragSession {
            previous_x: x,
            delta_x: 0.0,
            active: true,
        };
    }

    pub fn update(&mut self, x: f64) -> Option<f64> {
        if !self.session.active {
            return None;
        }
        let delta = self.session.previous_x - x;
        self.session.previous_x = x;
        self.session.delta_x = delta;
        Some(delta)
    }

    // Delta of the final move; `None` when that move was zero or no drag is active.
    pub fn release(&mut self) -> Option<f64> {
        let delta = self.session.delta_x;
        self.session.delta_x = 0.0;
        self.session.active = false;
        if delta != 0.0 {
            Some(delta)
        } else {
            None
        }
    }
}
