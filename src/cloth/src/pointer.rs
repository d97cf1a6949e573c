use protocol::user_event::{PointerButton, PointerEvent};

use crate::tunables::{DEFAULT_FOCUS, FORCE_RATE};
use crate::V2;

/// Cursor state as seen by the engine, mutated by the input layer.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerState {
	pos: V2,
	ppos: V2,
	force: f64,
	held: f64,
	focus: f64,
	focus_range: [f64; 2],
	primary: bool,
	secondary: bool,
	dragging: bool,
	ctrl: bool,
}

impl Default for PointerState {
	fn default() -> Self {
		Self {
			pos: V2::zeros(),
			ppos: V2::zeros(),
			force: 0.0,
			held: 0.0,
			focus: DEFAULT_FOCUS,
			focus_range: [30.0, 120.0],
			primary: false,
			secondary: false,
			dragging: false,
			ctrl: false,
		}
	}
}

impl PointerState {
	/// Scroll bounds, kept in step with the focus tunables.
	pub fn set_focus_range(&mut self, min: f64, max: f64) {
		self.focus_range = [min, max];
		self.focus = self.focus.max(min).min(max);
	}

	pub fn update_position(&mut self, pos: V2) {
		self.ppos = self.pos;
		self.pos = pos;
	}

	pub fn apply(&mut self, event: PointerEvent) {
		match event {
			PointerEvent::Moved(x, y) => self.update_position(V2::new(x, y)),
			PointerEvent::Pressed(PointerButton::Primary) => {
				self.primary = true;
				self.held = 0.0;
			}
			PointerEvent::Pressed(PointerButton::Secondary) => {
				self.secondary = true;
			}
			PointerEvent::Released(button) => {
				match button {
					PointerButton::Primary => {
						self.primary = false;
						self.reset_force();
					}
					PointerButton::Secondary => self.secondary = false,
				}
				self.dragging = false;
				self.ctrl = false;
			}
			// secondary drags cut, they never pull or rip
			PointerEvent::DragStarted => {
				if self.primary {
					self.dragging = true;
				} else {
					log::debug!("drag without the primary button ignored");
				}
			}
			PointerEvent::Scrolled(dy) => {
				let [min, max] = self.focus_range;
				self.focus = (self.focus + dy).max(min).min(max);
			}
			PointerEvent::Modifier(down) => self.ctrl = down,
		}
	}

	// force grows with the time the primary button has been held
	pub fn advance(&mut self, dt: f64) {
		if self.primary {
			self.held += dt;
			self.force = self.held * FORCE_RATE;
		}
	}

	pub fn reset_force(&mut self) {
		self.force = 0.0;
		self.held = 0.0;
	}

	pub fn pos(&self) -> V2 {
		self.pos
	}

	pub fn ppos(&self) -> V2 {
		self.ppos
	}

	pub fn displacement(&self) -> V2 {
		self.pos - self.ppos
	}

	pub fn force(&self) -> f64 {
		self.force
	}

	pub fn focus_radius(&self) -> f64 {
		self.focus
	}

	pub fn primary(&self) -> bool {
		self.primary
	}

	pub fn secondary(&self) -> bool {
		self.secondary
	}

	pub fn dragging(&self) -> bool {
		self.dragging
	}

	pub fn ctrl(&self) -> bool {
		self.ctrl
	}
}
