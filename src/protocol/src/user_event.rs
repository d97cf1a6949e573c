#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
	Primary,
	Secondary,
}

// input layer vocabulary, one per received window event
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
	Moved(f64, f64),
	Pressed(PointerButton),
	Released(PointerButton),
	DragStarted,
	Scrolled(f64),
	Modifier(bool),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateInfo {
	pub load: f32,
	pub particle_len: usize,
	// live, dangling
	pub constraint_len: [usize; 2],
	pub torn: usize,
}
