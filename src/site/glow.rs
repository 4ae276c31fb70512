/// Only mouse pointers drive the glow; touch and pen drags do not.
#[inline]
pub fn drives_glow(pointer_type: &str) -> bool {
    pointer_type == "mouse"
}

/// Position and visibility of the decorative pointer glow.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlowState {
    pub x: f64,
    pub y: f64,
    pub visible: bool,
}

/// Identifies one armed hide timer. Only the most recently issued ticket may
/// hide the glow; older ones are stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerTicket(u64);

/// Glow state machine (`Hidden` <-> `Visible`) with a debounced hide timer.
///
/// The tracker does not own a real timer. Each call that (re)arms the timer
/// hands back a [`TimerTicket`]; the caller schedules a callback after the
/// hide delay and passes the ticket to [`GlowTracker::on_timeout`]. Rearming
/// invalidates all earlier tickets, so a callback that escaped cancellation
/// cannot hide a glow that moved since.
#[derive(Clone, Debug, Default)]
pub struct GlowTracker {
    state: GlowState,
    generation: u64,
}

impl GlowTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> GlowState {
        self.state
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.state.visible
    }

    /// Arm the hide timer without touching the state (used once at mount).
    pub fn arm(&mut self) -> TimerTicket {
        self.generation = self.generation.wrapping_add(1);
        TimerTicket(self.generation)
    }

    /// Pointer moved to viewport coordinates `(x, y)`.
    pub fn on_move(&mut self, x: f64, y: f64) -> TimerTicket {
        self.state = GlowState {
            x,
            y,
            visible: true,
        };
        self.arm()
    }

    /// Pointer left the page. Returns `true` if the glow was visible.
    pub fn on_leave(&mut self) -> bool {
        self.hide()
    }

    /// The timer for `ticket` elapsed. Returns `true` only if this hid the
    /// glow; stale tickets and an already hidden glow are no-ops.
    pub fn on_timeout(&mut self, ticket: TimerTicket) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.hide()
    }

    fn hide(&mut self) -> bool {
        let was_visible = self.state.visible;
        self.state.visible = false;
        was_visible
    }
}
