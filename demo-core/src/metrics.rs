use web_time::Instant;

/// Frames-per-second counter refreshed once a second.
pub struct MetricsRecorder {
    fps: f32,
    last_update_time: Instant,
    frames_last_time_span: usize,
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            fps: 0.0,
            last_update_time: Instant::now(),
            frames_last_time_span: 0,
        }
    }

    pub fn update_fps(&mut self) {
        self.frames_last_time_span += 1;
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_update_time);
        if elapsed.as_secs() >= 1 {
            self.last_update_time = now;
            self.fps = self.frames_last_time_span as f32 / elapsed.as_secs_f32();
            self.frames_last_time_span = 0;
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}
