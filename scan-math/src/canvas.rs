//! Display sizing for the square scan canvas.

/// Largest on-screen canvas edge in CSS pixels
pub const MAX_DISPLAY_PX: u32 = 300;

/// On-screen edge length for a canvas of `resolution` samples per side.
///
/// Small scans render one sample per pixel; larger scans are downscaled to
/// `max_display`.
pub fn display_size(resolution: u32, max_display: u32) -> u32 {
    resolution.min(max_display)
}
