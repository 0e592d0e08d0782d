impl<'a, IN, SP> PresentationApp<'a, IN, SP>
where
    IN: InputProvider,
    SP: StatsProvider,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.apply_input_event(event, now_ms),
                Ok(None) => break,
                Err(_) => {
                    warn!("input: provider failed, dropping remaining events this tick");
                    break;
                }
            }
        }
    }

    fn apply_input_event(&mut self, event: InputEvent, now_ms: u64) {
        match event {
            InputEvent::Pointer(pointer) => {
                let _ = self.handle_pointer_event(pointer, now_ms);
            }
            InputEvent::Scroll { target, direction } => {
                let _ = self.handle_scroll(target, direction, now_ms);
            }
        }
    }

    pub fn handle_pointer_event(&mut self, event: PointerEvent, now_ms: u64) -> PointerOutcome {
        if self.stats.is_none() {
            return PointerOutcome::AwaitingData;
        }

        match route_pointer(&event) {
            PointerRoute::Control { value } => {
                self.apply_control(value, now_ms);
                PointerOutcome::Control
            }
            PointerRoute::ScrollRegion => PointerOutcome::ScrollRegion,
            PointerRoute::Advance => {
                if self.advance(now_ms) {
                    PointerOutcome::Advanced
                } else {
                    PointerOutcome::Clamped
                }
            }
            PointerRoute::Retreat => {
                if self.retreat(now_ms) {
                    PointerOutcome::Retreated
                } else {
                    PointerOutcome::Clamped
                }
            }
        }
    }

    /// Wheel gestures reach the mounted slide when its instance takes them
    /// from `target`.
    pub fn handle_scroll(
        &mut self,
        target: PointerTarget,
        direction: ScrollDirection,
        now_ms: u64,
    ) -> bool {
        if self.stats.is_none() || !self.mounted.instance.accepts_scroll(target) {
            return false;
        }
        if !self.mounted.instance.apply_scroll(direction) {
            return false;
        }

        if let Some(section) = self.mounted.instance.deck_section() {
            debug!("input: deck section={:?}", section);
            self.start_transition(AnimationKind::Fade, now_ms, ANIM_SNAP_MS);
        }
        self.pending_redraw = true;
        true
    }

    /// Bounds text scrolling on the mounted slide to what the host could draw.
    pub fn limit_text_scroll(&mut self, limit: u16) {
        if self.mounted.instance.limit_text_scroll(limit) {
            self.pending_redraw = true;
        }
    }

    fn apply_control(&mut self, value: u8, now_ms: u64) {
        match self.mounted.instance.apply_control(value) {
            MeterChange::Unchanged => {}
            MeterChange::Moved => self.pending_redraw = true,
            MeterChange::Unlocked => {
                info!("input: meter unlocked on slide {}", self.mounted.index);
                self.start_transition(AnimationKind::Pulse, now_ms, ANIM_UNLOCK_MS);
                self.pending_redraw = true;
            }
        }
    }
}
