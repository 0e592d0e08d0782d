impl<'a, IN, SP> PresentationApp<'a, IN, SP>
where
    IN: InputProvider,
    SP: StatsProvider,
{
    fn poll_stats(&mut self, now_ms: u64) {
        if self.stats.is_some() {
            return;
        }

        match self.stats_source.poll_snapshot() {
            Ok(Some(snapshot)) => self.provide_stats(snapshot, now_ms),
            Ok(None) => {}
            Err(_) => {
                if !self.stats_fault {
                    warn!("stats: provider failed, staying on loading screen");
                    self.stats_fault = true;
                    self.pending_redraw = true;
                }
            }
        }
    }

    /// Installs the snapshot and starts the deck at its current slide.
    ///
    /// The snapshot is immutable afterwards; a second call is ignored.
    pub fn provide_stats(&mut self, snapshot: StatsSnapshot, now_ms: u64) {
        if self.stats.is_some() {
            debug!("stats: snapshot already installed, ignoring");
            return;
        }

        info!(
            "stats: loaded total={} authors={} words={}",
            snapshot.total_messages(),
            snapshot.authors().len(),
            snapshot.top_words().len()
        );
        self.stats = Some(snapshot);
        self.stats_fault = false;
        self.mount_current(AnimationKind::Fade, now_ms);
    }

    fn ambient_frame_due(&mut self, now_ms: u64) -> bool {
        let slot = now_ms / AMBIENT_FRAME_MS;
        if self.last_ambient_slot == Some(slot) {
            return false;
        }
        self.last_ambient_slot = Some(slot);
        true
    }
}
