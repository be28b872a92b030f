//! A mounted route map: scene, viewport controller and wheel listener.
//!
//! The scene and the viewport are kept apart and only combined in
//! [`RouteVisualization::frame`]. Replacing the data re-renders the scene but
//! keeps the current pan and zoom. Dropping the visualization detaches the
//! wheel listener and discards the viewport, so a remount starts from zoom 1
//! and zero pan.

use kurbo::{Affine, Point};
use tracing::debug;

use crate::config::RenderConfig;
use crate::controller::{InteractionState, PointerEvent, ViewportController, WheelTick};
use crate::controls::ZoomControls;
use crate::error::Result;
use crate::mapper::DrawingArea;
use crate::model::{Instance, Solution};
use crate::renderer::{RouteRenderer, Scene};
use crate::surface::{InteractiveSurface, WheelListener};
use crate::svg;
use crate::viewport::Viewport;

/// The scene together with the viewport transform to draw it with.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub scene: &'a Scene,
    pub viewport: Viewport,
}

impl Frame<'_> {
    pub fn transform(&self) -> Affine {
        self.viewport.transform()
    }

    /// Where a scene point ends up on the surface.
    pub fn to_surface(&self, point: Point) -> Point {
        self.transform() * point
    }
}

#[derive(Debug)]
pub struct RouteVisualization<'s, S: InteractiveSurface> {
    renderer: RouteRenderer,
    scene: Scene,
    controller: ViewportController,
    listener: WheelListener<'s, S>,
}

impl<'s, S: InteractiveSurface> RouteVisualization<'s, S> {
    pub fn mount(
        surface: &'s mut S,
        instance: &Instance,
        solution: &Solution,
        config: &RenderConfig,
    ) -> Result<Self> {
        config.validate()?;
        let renderer = RouteRenderer::new(config);
        let scene = renderer.render(instance, solution);
        let listener = WheelListener::attach(surface)?;
        debug!(
            routes = solution.routes.len(),
            customers = instance.customers.len(),
            segments = scene.segments.len(),
            "route visualization mounted"
        );

        Ok(Self {
            renderer,
            scene,
            controller: ViewportController::new(config.zoom)?,
            listener,
        })
    }

    /// Explicit unmount; equivalent to dropping.
    pub fn unmount(self) {
        debug!(id = ?self.listener.id(), "route visualization unmounted");
    }

    pub fn set_data(&mut self, instance: &Instance, solution: &Solution) {
        self.scene = self.renderer.render(instance, solution);
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn area(&self) -> DrawingArea {
        self.renderer.area()
    }

    pub fn viewport(&self) -> &Viewport {
        self.controller.viewport()
    }

    pub fn interaction(&self) -> InteractionState {
        self.controller.state()
    }

    pub fn surface(&self) -> &S {
        self.listener.surface()
    }

    pub fn frame(&self) -> Frame<'_> {
        Frame {
            scene: &self.scene,
            viewport: *self.controller.viewport(),
        }
    }

    pub fn to_svg(&self) -> Result<String> {
        svg::to_svg_string(&self.frame(), &self.area())
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        self.controller.handle_pointer(event)
    }

    pub fn pointer_down(&mut self, pointer: Point) {
        self.controller.pointer_down(pointer);
    }

    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        self.controller.pointer_move(pointer)
    }

    pub fn pointer_up(&mut self) {
        self.controller.pointer_up();
    }

    pub fn pointer_leave(&mut self) {
        self.controller.pointer_leave();
    }

    pub fn wheel(&mut self, tick: WheelTick) -> bool {
        self.controller.wheel(tick)
    }

    /// Feeds a raw wheel delta from the listener.
    pub fn wheel_delta(&mut self, delta_y: f64) -> bool {
        WheelTick::from_delta_y(delta_y).is_some_and(|tick| self.wheel(tick))
    }
}

impl<S: InteractiveSurface> ZoomControls for RouteVisualization<'_, S> {
    fn zoom_in(&mut self) -> bool {
        self.controller.zoom_in()
    }

    fn zoom_out(&mut self) -> bool {
        self.controller.zoom_out()
    }

    fn reset_view(&mut self) -> bool {
        self.controller.reset_view()
    }
}
