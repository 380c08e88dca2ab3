/// One of the two draggable handles of a range slider.
///
/// Grips are positional: `Left` is the handle that starts at the current
/// minimum, `Right` the one that starts at the current maximum. Once a drag
/// crosses them over, the reported min/max follow the sorted values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Grip {
    Left,
    Right,
}

impl Grip {
    pub fn other(self) -> Self {
        match self {
            Grip::Left => Grip::Right,
            Grip::Right => Grip::Left,
        }
    }
}

/// Pointer event types tracked at document scope while a grip is dragged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    Move,
    Up,
}

impl PointerEventKind {
    pub const ALL: [PointerEventKind; 2] = [PointerEventKind::Move, PointerEventKind::Up];

    pub fn as_str(self) -> &'static str {
        match self {
            PointerEventKind::Move => "pointermove",
            PointerEventKind::Up => "pointerup",
        }
    }
}

/// A document-level pointer notification.
///
/// `track_fraction` is the pointer position along the dragged slider's
/// track, `0.0` at the left end and `1.0` at the right end. Values outside
/// that interval mean the pointer left the track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Move { track_fraction: f64 },
    Up,
}

impl PointerEvent {
    pub fn kind(&self) -> PointerEventKind {
        match self {
            PointerEvent::Move { .. } => PointerEventKind::Move,
            PointerEvent::Up => PointerEventKind::Up,
        }
    }
}
