use crate::state::SectionId;

/// Vertical extent of a section in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: SectionId,
    pub top: f32,
    pub bottom: f32,
}

impl SectionBounds {
    pub fn new(id: SectionId, top: f32, bottom: f32) -> Self {
        Self { id, top, bottom }
    }

    /// Both edges inclusive, so adjacent sections share their boundary.
    #[inline]
    pub fn contains(&self, y: f32) -> bool {
        y >= self.top && y <= self.bottom
    }

    /// Intersects a viewport whose top edge is `scroll_y`.
    #[inline]
    pub fn intersects_viewport(&self, scroll_y: f32, viewport_height: f32) -> bool {
        let rel_top = self.top - scroll_y;
        let rel_bottom = self.bottom - scroll_y;
        rel_top < viewport_height && rel_bottom > 0.0
    }
}

#[inline]
pub fn viewport_midpoint(scroll_y: f32, viewport_height: f32) -> f32 {
    scroll_y + viewport_height / 2.0
}

/// Last section (in iteration order) containing `y`.
pub fn section_at(sections: &[SectionBounds], y: f32) -> Option<SectionId> {
    let mut found = None;
    for s in sections {
        if s.contains(y) {
            found = Some(s.id);
        }
    }
    found
}

/// Resolves the active section from the viewport midpoint.
#[derive(Debug)]
pub struct SectionTracker {
    sections: Vec<SectionBounds>,
    active: SectionId,
}

impl SectionTracker {
    pub fn new(initial: SectionId) -> Self {
        Self {
            sections: Vec::new(),
            active: initial,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn sections(&self) -> &[SectionBounds] {
        &self.sections
    }

    /// Replace the measured bounds; order is the tie-break order.
    pub fn set_sections(&mut self, sections: Vec<SectionBounds>) {
        self.sections = sections;
    }

    /// Re-evaluate. Returns the new section if it changed; with no match the
    /// previous section stays active.
    pub fn update(&mut self, scroll_y: f32, viewport_height: f32) -> Option<SectionId> {
        let mid = viewport_midpoint(scroll_y, viewport_height);
        match section_at(&self.sections, mid) {
            Some(id) if id != self.active => {
                self.active = id;
                Some(id)
            }
            _ => None,
        }
    }
}

/// At most one pending frame callback for a burst of events. Once closed it
/// never schedules again and swallows any callback already in flight.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: bool,
    closed: bool,
}

impl FrameGate {
    /// True when the caller should schedule a frame; false while one is
    /// pending or after [`FrameGate::close`].
    pub fn request(&mut self) -> bool {
        if self.pending || self.closed {
            false
        } else {
            self.pending = true;
            true
        }
    }

    /// Called from the scheduled frame. Returns whether the handler should run.
    pub fn release(&mut self) -> bool {
        self.pending = false;
        !self.closed
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}
