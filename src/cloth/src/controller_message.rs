use protocol::user_event::PointerEvent;

use crate::tunables::TunableKind;

pub enum ControllerMessage {
	Pointer(PointerEvent),
	// rebuild the cloth at the canvas-centred anchor
	Reset,
	Resize(f64, f64),
	SetTunable(TunableKind, f64),
	ResetTunables,
}
