/// Index of the slide on screen. Clamped at both ends; never wraps.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NavigationState {
    current: usize,
    count: usize,
}

impl NavigationState {
    pub const fn new(count: usize) -> Self {
        Self {
            current: 0,
            count: if count == 0 { 1 } else { count },
        }
    }

    pub const fn current(&self) -> usize {
        self.current
    }

    pub const fn count(&self) -> usize {
        self.count
    }

    pub const fn is_last(&self) -> bool {
        self.current + 1 >= self.count
    }

    /// Returns whether `current` moved.
    pub fn advance(&mut self) -> bool {
        if self.current + 1 < self.count {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Returns whether `current` moved.
    pub fn retreat(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    pub const fn progress(&self) -> Progress {
        Progress {
            current: self.current,
            count: self.count,
        }
    }
}

impl<'a, IN, SP> PresentationApp<'a, IN, SP>
where
    IN: InputProvider,
    SP: StatsProvider,
{
    /// Moves one slide forward and remounts. No-op at the last slide or while loading.
    pub fn advance(&mut self, now_ms: u64) -> bool {
        if self.stats.is_none() || !self.nav.advance() {
            return false;
        }
        debug!(
            "nav: advance to {}/{}",
            self.nav.current().saturating_add(1),
            self.nav.count()
        );
        self.mount_current(AnimationKind::SlideLeft, now_ms);
        true
    }

    /// Moves one slide back and remounts. No-op at the first slide or while loading.
    pub fn retreat(&mut self, now_ms: u64) -> bool {
        if self.stats.is_none() || !self.nav.retreat() {
            return false;
        }
        debug!(
            "nav: retreat to {}/{}",
            self.nav.current().saturating_add(1),
            self.nav.count()
        );
        self.mount_current(AnimationKind::SlideRight, now_ms);
        true
    }

    // Previous instance is dropped here; slide-local state never survives a move.
    fn mount_current(&mut self, kind: AnimationKind, now_ms: u64) {
        let index = self.nav.current();
        let instance = match self.registry.definition(index) {
            Ok(definition) => definition.mount(),
            Err(err) => {
                error!("nav: mount failed: {}", err);
                SlideInstance::Static
            }
        };
        debug!("nav: mount slide={} at={}ms", index, now_ms);

        self.mounted = MountedSlide {
            index,
            instance,
            mounted_at_ms: now_ms,
        };
        self.start_transition(kind, now_ms, ANIM_MOUNT_MS);
        self.pending_redraw = true;
    }

    fn start_transition(&mut self, kind: AnimationKind, now_ms: u64, duration_ms: u16) {
        self.transition = Some(AnimationSpec::new(kind, now_ms, duration_ms));
    }

    fn transition_frame(&self, now_ms: u64) -> Option<AnimationFrame> {
        self.transition.and_then(|anim| anim.frame(now_ms))
    }
}
