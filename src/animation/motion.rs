use std::sync::Arc;

use egui::mutex::Mutex;

struct Slot {
    value: f32,
    writes: u64,
}

/// Shared animated scalar, written by an animation loop and read by the widget.
///
/// Clones observe the same value. Every write bumps a counter so readers can
/// tell whether anything touched the value since they last looked.
#[derive(Clone)]
pub struct MotionValue {
    slot: Arc<Mutex<Slot>>,
}

impl Default for MotionValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl std::fmt::Debug for MotionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let slot = self.slot.lock();
        f.debug_struct("MotionValue")
            .field("value", &slot.value)
            .field("writes", &slot.writes)
            .finish()
    }
}

impl MotionValue {
    pub fn new(value: f32) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot { value, writes: 0 })),
        }
    }

    pub fn get(&self) -> f32 {
        self.slot.lock().value
    }

    pub fn set(&self, value: f32) {
        let mut slot = self.slot.lock();
        slot.value = value;
        slot.writes += 1;
    }

    /// Number of writes since creation.
    pub fn writes(&self) -> u64 {
        self.slot.lock().writes
    }
}

/// Two motion values animated together, like the x/y offset of a layer.
#[derive(Debug, Clone, Default)]
pub struct MotionVec2 {
    pub x: MotionValue,
    pub y: MotionValue,
}

impl MotionVec2 {
    pub fn get(&self) -> egui::Vec2 {
        egui::Vec2::new(self.x.get(), self.y.get())
    }

    pub fn set(&self, v: egui::Vec2) {
        self.x.set(v.x);
        self.y.set(v.y);
    }

    pub fn writes(&self) -> u64 {
        self.x.writes() + self.y.writes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let a = MotionValue::new(1.0);
        let b = a.clone();
        b.set(4.0);
        assert_eq!(a.get(), 4.0);
        assert_eq!(a.writes(), 1);
    }
}
