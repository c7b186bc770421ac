//! "No data" overlay toggling.

use crate::traits::{PresentationSurface, SurfaceNode};
use std::time::Duration;
use tracing::warn;

/// Selector of the overlay shown when a graph has nothing to draw.
pub const NO_DATA_SELECTOR: &str = ".no-data";

/// Attribute controlling whether an element receives pointer events.
pub const POINTER_EVENTS: &str = "pointer-events";

/// Attribute controlling element opacity.
pub const OPACITY: &str = "opacity";

/// Duration of the overlay fade.
pub const NO_DATA_TRANSITION: Duration = Duration::from_millis(600);

/// Shows the "no data" overlay when `available` is false and hides it otherwise.
///
/// While hidden the overlay lets pointer events through. The fade is started
/// on the surface and this returns without waiting for it.
pub fn set_data_available<S>(surface: &mut S, available: bool)
where
    S: PresentationSurface + ?Sized,
{
    let Some(overlay) = surface.select(NO_DATA_SELECTOR) else {
        warn!(selector = NO_DATA_SELECTOR, "No overlay element");
        return;
    };

    let (pointer_events, opacity) = if available {
        ("none", 0.0)
    } else {
        ("all", 1.0)
    };
    overlay.set_attr(POINTER_EVENTS, pointer_events);
    overlay.transition_attr(OPACITY, opacity, NO_DATA_TRANSITION);
}
