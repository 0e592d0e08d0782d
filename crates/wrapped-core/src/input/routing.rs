//! Pointer routing between the slider, self-scrolling regions, and tap navigation.
//!
//! Guards run in order and the first one that claims the event wins. Only an
//! event no guard claims falls through to the tap zones.

use super::{PointerEvent, PointerTarget};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PointerRoute {
    /// Consumed by the range control under the pointer.
    Control { value: u8 },
    /// Consumed by a self-scrolling region.
    ScrollRegion,
    Advance,
    Retreat,
}

type PointerGuard = fn(&PointerEvent) -> Option<PointerRoute>;

const POINTER_GUARDS: [PointerGuard; 2] = [form_control_guard, self_scrolling_guard];

pub fn route_pointer(event: &PointerEvent) -> PointerRoute {
    POINTER_GUARDS
        .iter()
        .find_map(|guard| guard(event))
        .unwrap_or_else(|| tap_zone(event))
}

fn form_control_guard(event: &PointerEvent) -> Option<PointerRoute> {
    match event.target {
        PointerTarget::RangeInput { value } => Some(PointerRoute::Control { value }),
        _ => None,
    }
}

fn self_scrolling_guard(event: &PointerEvent) -> Option<PointerRoute> {
    matches!(event.target, PointerTarget::SelfScrolling).then_some(PointerRoute::ScrollRegion)
}

// Right half strictly past the midpoint advances: x > w / 2 <=> 2x > w.
fn tap_zone(event: &PointerEvent) -> PointerRoute {
    if event.client_x as u32 * 2 > event.viewport_width as u32 {
        PointerRoute::Advance
    } else {
        PointerRoute::Retreat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface(x: u16, width: u16) -> PointerEvent {
        PointerEvent::new(PointerTarget::Surface, x, width)
    }

    #[test]
    fn tap_halves_pick_direction() {
        assert_eq!(route_pointer(&surface(900, 1000)), PointerRoute::Advance);
        assert_eq!(route_pointer(&surface(100, 1000)), PointerRoute::Retreat);
        assert_eq!(route_pointer(&surface(500, 1000)), PointerRoute::Retreat);
        assert_eq!(route_pointer(&surface(501, 1000)), PointerRoute::Advance);
    }

    #[test]
    fn odd_width_midpoint_retreats() {
        // 40 > 81 / 2 = 40.5 is false; 41 > 40.5 is true.
        assert_eq!(route_pointer(&surface(40, 81)), PointerRoute::Retreat);
        assert_eq!(route_pointer(&surface(41, 81)), PointerRoute::Advance);
    }

    #[test]
    fn slider_claims_event_before_tap_zones() {
        for x in [0, 400, 999] {
            let event = PointerEvent::new(PointerTarget::RangeInput { value: 42 }, x, 1000);
            assert_eq!(route_pointer(&event), PointerRoute::Control { value: 42 });
        }
    }

    #[test]
    fn self_scrolling_region_claims_event_at_any_x() {
        for x in [0, 500, 999] {
            let event = PointerEvent::new(PointerTarget::SelfScrolling, x, 1000);
            assert_eq!(route_pointer(&event), PointerRoute::ScrollRegion);
        }
    }
}
