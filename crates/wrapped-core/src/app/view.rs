impl<'a, IN, SP> PresentationApp<'a, IN, SP>
where
    IN: InputProvider,
    SP: StatsProvider,
{
    pub fn new(
        registry: SlideRegistry,
        input: IN,
        stats_source: SP,
        personalization: Personalization<'a>,
    ) -> Self {
        let instance = registry
            .definition(0)
            .map(|definition| definition.mount())
            .unwrap_or(SlideInstance::Static);

        Self {
            registry,
            input,
            stats_source,
            stats: None,
            stats_fault: false,
            personalization,
            nav: NavigationState::new(registry.count()),
            mounted: MountedSlide {
                index: 0,
                instance,
                mounted_at_ms: 0,
            },
            pending_redraw: true,
            transition: None,
            last_ambient_slot: None,
        }
    }

    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.poll_stats(now_ms);
        self.process_inputs(now_ms);

        let ambient = self.ambient_frame_due(now_ms);
        if self.pending_redraw || ambient || self.transition_frame(now_ms).is_some() {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    pub fn with_screen<F>(&self, now_ms: u64, f: F)
    where
        F: FnOnce(Screen<'_>),
    {
        let loading = Screen::Loading {
            message: LOADING_MESSAGE,
            detail: self.stats_fault.then_some(LOADING_FAULT_DETAIL),
            elapsed_ms: now_ms,
        };
        let Some(stats) = self.stats.as_ref() else {
            f(loading);
            return;
        };

        let definition = match self.registry.definition(self.mounted.index) {
            Ok(definition) => definition,
            Err(err) => {
                error!("view: {}", err);
                f(loading);
                return;
            }
        };

        let ctx = SlideContext::new(stats, &self.personalization);
        f(Screen::Slide(SlideFrame {
            key: definition.key,
            backdrop: definition.backdrop,
            view: definition.produce(&ctx),
            instance: &self.mounted.instance,
            progress: self.nav.progress(),
            elapsed_ms: now_ms.saturating_sub(self.mounted.mounted_at_ms),
            animation: self.transition_frame(now_ms),
        }));
    }

    pub fn current(&self) -> usize {
        self.nav.current()
    }

    pub fn slide_count(&self) -> usize {
        self.nav.count()
    }

    pub fn progress(&self) -> Progress {
        self.nav.progress()
    }

    pub fn has_stats(&self) -> bool {
        self.stats.is_some()
    }

    pub fn stats(&self) -> Option<&StatsSnapshot> {
        self.stats.as_ref()
    }

    pub fn registry(&self) -> &SlideRegistry {
        &self.registry
    }

    pub fn input(&self) -> &IN {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut IN {
        &mut self.input
    }

    /// Slide-local state of the slide on screen.
    pub fn mounted_instance(&self) -> &SlideInstance {
        &self.mounted.instance
    }
}
