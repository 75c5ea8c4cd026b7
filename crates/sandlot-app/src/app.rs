//! `SandboxApp` trait definition.

use crate::context::AppContext;
use crate::frame::FrameContext;

/// Trait for Sandlot applications.
///
/// Implement this trait to drive the sandbox. The framework owns the world,
/// the input manager and the camera, and runs the fixed-tick loop.
pub trait SandboxApp: Sized {
    /// Initialize the application.
    ///
    /// Called once after the world has been created. Use this to add terrain
    /// or adjust the world before the first tick.
    fn init(ctx: &mut AppContext) -> anyhow::Result<Self>;

    /// Feed input for the upcoming tick.
    ///
    /// Called before every tick. Press and release bindings on
    /// `ctx.input` and move the cursor.
    #[allow(unused_variables)]
    fn input(&mut self, ctx: &mut AppContext) {}

    /// Observe the tick that was just simulated.
    ///
    /// Called every tick after the world update and camera follow.
    fn update(&mut self, ctx: &AppContext, frame: &FrameContext);

    /// Present the world.
    ///
    /// Default implementation draws nothing.
    #[allow(unused_variables)]
    fn render(&mut self, ctx: &AppContext, frame: &FrameContext) -> anyhow::Result<()> {
        Ok(())
    }

    /// Return `true` to stop the loop after the current tick.
    ///
    /// Default implementation never asks to exit.
    #[allow(unused_variables)]
    fn should_exit(&self, ctx: &AppContext) -> bool {
        false
    }

    /// Cleanup before shutdown.
    ///
    /// Default implementation does nothing.
    #[allow(unused_variables)]
    fn cleanup(&mut self, ctx: &mut AppContext) {}
}
