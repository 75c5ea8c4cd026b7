//! Per-tick context for rendering.

use sandlot_world::TickReport;

/// Context for the tick that was just simulated.
pub struct FrameContext {
    /// Events produced by the tick.
    pub report: TickReport,
    /// Simulation step in seconds.
    pub dt: f32,
    /// Current tick number.
    pub frame_number: u64,
}

impl FrameContext {
    /// Create a new frame context.
    pub(crate) const fn new(report: TickReport, dt: f32, frame_number: u64) -> Self {
        Self {
            report,
            dt,
            frame_number,
        }
    }
}
