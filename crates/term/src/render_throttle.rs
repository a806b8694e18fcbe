/// Decides whether a new frame is worth drawing.
///
/// While something is animating (a drag in flight, a card returning to rest)
/// every frame is drawn. Otherwise a frame is drawn when the view fingerprint
/// changes, plus a periodic refresh every `refresh_interval_ms`.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    refresh_interval_ms: u64,
    last: Option<(u64, u64)>,
}

impl RenderThrottle {
    pub fn new(refresh_interval_ms: u64) -> Self {
        Self {
            refresh_interval_ms,
            last: None,
        }
    }

    /// Forget the last frame so the next call always renders.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, animating: bool) -> bool {
        let render = match self.last {
            None => true,
            Some(_) if animating => true,
            Some((_, last_fp)) if last_fp != fingerprint => true,
            Some((last_ms, _)) => now_ms.saturating_sub(last_ms) >= self.refresh_interval_ms,
        };
        if render {
            self.last = Some((now_ms, fingerprint));
        }
        render
    }
}
