//! Presentation state machine: slide navigation, pointer routing, and mount lifecycle.

use log::{debug, error, info, warn};

use crate::{
    input::{
        InputEvent, InputProvider, PointerEvent, PointerRoute, PointerTarget, ScrollDirection,
        route_pointer,
    },
    meter::MeterChange,
    render::{AnimationFrame, AnimationKind, AnimationSpec, Progress, Screen, SlideFrame},
    slides::{Personalization, SlideContext, SlideInstance, SlideRegistry},
    stats::{StatsProvider, StatsSnapshot},
};

const ANIM_MOUNT_MS: u16 = 300;
const ANIM_UNLOCK_MS: u16 = 600;
const ANIM_SNAP_MS: u16 = 180;
const AMBIENT_FRAME_MS: u64 = 120;

const LOADING_MESSAGE: &str = "Loading Data...";
const LOADING_FAULT_DETAIL: &str = "Statistics unreadable, retrying";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

/// What a pointer event ended up doing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PointerOutcome {
    /// No statistics yet; navigation is frozen.
    AwaitingData,
    /// Taken by the range control under the pointer.
    Control,
    /// Taken by a self-scrolling region.
    ScrollRegion,
    Advanced,
    Retreated,
    /// Tap asked to move past the first or last slide.
    Clamped,
}

#[derive(Clone, Copy, Debug)]
struct MountedSlide {
    index: usize,
    instance: SlideInstance,
    mounted_at_ms: u64,
}

pub struct PresentationApp<'a, IN, SP>
where
    IN: InputProvider,
    SP: StatsProvider,
{
    registry: SlideRegistry,
    input: IN,
    stats_source: SP,
    stats: Option<StatsSnapshot>,
    stats_fault: bool,
    personalization: Personalization<'a>,
    nav: NavigationState,
    mounted: MountedSlide,
    pending_redraw: bool,
    transition: Option<AnimationSpec>,
    last_ambient_slot: Option<u64>,
}

include!("navigation.rs");
include!("input.rs");
include!("runtime.rs");
include!("view.rs");

#[cfg(test)]
mod tests;
