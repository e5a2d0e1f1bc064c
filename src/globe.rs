use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use dioxus::web::WebEventExt;
use rand::Rng;
use std::cell::Cell;
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;

use crate::scene::{FrameGeometry, GlobeScene};

#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("scene container unavailable")]
    ContainerUnavailable,
    #[error("render surface unavailable: {0}")]
    Surface(String),
}

/// The place a scene renders into: owns the container and knows how to
/// attach, size, draw and remove a render surface.
pub trait SceneHost {
    type Surface;

    fn container_size(&self) -> (f64, f64);
    fn attach_surface(&mut self, width: f64, height: f64) -> Result<Self::Surface, SceneError>;
    fn resize_surface(&mut self, surface: &Self::Surface, width: f64, height: f64);
    fn present(&mut self, surface: &Self::Surface, frame: &FrameGeometry);
    fn detach_surface(&mut self, surface: Self::Surface);
}

/// Cancellation flag shared between the controller and its frame loop.
#[derive(Clone, Debug, Default)]
pub struct LoopFlag(Rc<Cell<bool>>);

impl LoopFlag {
    fn running() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_running(&self) -> bool {
        self.0.get()
    }

    pub fn cancel(&self) {
        self.0.set(false);
    }
}

pub struct SceneController<H: SceneHost> {
    host: H,
    surface: Option<H::Surface>,
    scene: GlobeScene,
    viewport: (f64, f64),
    flag: LoopFlag,
}

impl<H: SceneHost> SceneController<H> {
    /// Builds the scene and attaches one surface. Nothing is attached when
    /// the container is missing or the surface cannot be created.
    pub fn mount<R: Rng + ?Sized>(host: Option<H>, rng: &mut R) -> Result<Self, SceneError> {
        let Some(mut host) = host else {
            return Err(SceneError::ContainerUnavailable);
        };
        let viewport = host.container_size();
        let surface = host.attach_surface(viewport.0, viewport.1)?;
        let scene = GlobeScene::build(rng, viewport.0, viewport.1);
        tracing::debug!(
            width = viewport.0,
            height = viewport.1,
            stars = scene.starfield.points.len(),
            "globe: mount"
        );
        Ok(Self {
            host,
            surface: Some(surface),
            scene,
            viewport,
            flag: LoopFlag::running(),
        })
    }

    pub fn loop_flag(&self) -> LoopFlag {
        self.flag.clone()
    }

    pub fn scene(&self) -> &GlobeScene {
        &self.scene
    }

    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    /// Advances and draws one frame. Returns `false` once torn down.
    pub fn tick(&mut self) -> bool {
        if !self.flag.is_running() {
            return false;
        }
        let Some(surface) = self.surface.as_ref() else {
            return false;
        };
        self.scene.advance();
        let frame = self.scene.project(self.viewport.0, self.viewport.1);
        self.host.present(surface, &frame);
        true
    }

    pub fn resize(&mut self) {
        let Some(surface) = self.surface.as_ref() else {
            return;
        };
        let (width, height) = self.host.container_size();
        if (width, height) == self.viewport {
            return;
        }
        self.viewport = (width, height);
        self.scene.camera.set_aspect(width, height);
        self.host.resize_surface(surface, width, height);
    }

    /// Stops the loop and removes the surface. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        self.flag.cancel();
        if let Some(surface) = self.surface.take() {
            self.host.detach_surface(surface);
            tracing::debug!("globe: teardown");
        }
    }
}

impl<H: SceneHost> Drop for SceneController<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::*;
    use gloo_render::{request_animation_frame, AnimationFrame};
    use rand::SeedableRng;
    use std::f64::consts::TAU;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use crate::scene::Polyline;
    use crate::starfield::entropy_seed;

    const GLOBE_BASE: (f32, f32, f32) = (31.0, 41.0, 55.0);
    const GLOBE_EDGE: &str = "#0b1120";

    pub struct CanvasHost {
        container: web_sys::Element,
    }

    pub struct CanvasSurface {
        canvas: HtmlCanvasElement,
        context: CanvasRenderingContext2d,
    }

    fn surface_error(message: &str) -> SceneError {
        SceneError::Surface(message.to_string())
    }

    fn size_canvas(canvas: &HtmlCanvasElement, width: f64, height: f64) {
        canvas.set_width(width.max(0.0) as u32);
        canvas.set_height(height.max(0.0) as u32);
    }

    impl SceneHost for CanvasHost {
        type Surface = CanvasSurface;

        fn container_size(&self) -> (f64, f64) {
            (
                self.container.client_width() as f64,
                self.container.client_height() as f64,
            )
        }

        fn attach_surface(&mut self, width: f64, height: f64) -> Result<CanvasSurface, SceneError> {
            let document = web_sys::window()
                .and_then(|window| window.document())
                .ok_or_else(|| surface_error("document unavailable"))?;
            let canvas = document
                .create_element("canvas")
                .map_err(|_| surface_error("canvas create failed"))?
                .dyn_into::<HtmlCanvasElement>()
                .map_err(|_| surface_error("canvas cast failed"))?;
            canvas.set_class_name("globe-surface");
            size_canvas(&canvas, width, height);
            let context = canvas
                .get_context("2d")
                .map_err(|_| surface_error("2d context failed"))?
                .ok_or_else(|| surface_error("2d context missing"))?
                .dyn_into::<CanvasRenderingContext2d>()
                .map_err(|_| surface_error("2d context cast failed"))?;
            self.container
                .append_child(&canvas)
                .map_err(|_| surface_error("canvas append failed"))?;
            Ok(CanvasSurface { canvas, context })
        }

        fn resize_surface(&mut self, surface: &CanvasSurface, width: f64, height: f64) {
            size_canvas(&surface.canvas, width, height);
        }

        fn present(&mut self, surface: &CanvasSurface, frame: &FrameGeometry) {
            paint(&surface.context, frame);
        }

        fn detach_surface(&mut self, surface: CanvasSurface) {
            surface.canvas.remove();
        }
    }

    fn globe_fill(shade: f32) -> String {
        let scale = 0.6 + 0.8 * shade;
        let (r, g, b) = GLOBE_BASE;
        format!(
            "rgb({}, {}, {})",
            (r * scale).min(255.0) as u8,
            (g * scale).min(255.0) as u8,
            (b * scale).min(255.0) as u8
        )
    }

    fn stroke(context: &CanvasRenderingContext2d, line: &Polyline, style: &str) {
        let mut points = line.points.iter();
        let Some(first) = points.next() else {
            return;
        };
        context.begin_path();
        context.set_line_width(line.width as f64);
        context.set_stroke_style_str(style);
        context.move_to(first.x as f64, first.y as f64);
        for point in points {
            context.line_to(point.x as f64, point.y as f64);
        }
        context.stroke();
    }

    fn paint(context: &CanvasRenderingContext2d, frame: &FrameGeometry) {
        context.clear_rect(0.0, 0.0, frame.width, frame.height);

        context.set_fill_style_str("rgba(255, 255, 255, 0.9)");
        for star in &frame.stars {
            context.fill_rect(star.x as f64, star.y as f64, 1.0, 1.0);
        }

        let globe = &frame.globe;
        let mut front_rings = Vec::new();
        for ring in &frame.rings {
            let (behind, front) = ring.split_at_depth(globe.center.depth);
            for run in &behind {
                stroke(context, run, "rgba(255, 255, 255, 0.85)");
            }
            front_rings.extend(front);
        }

        if globe.radius > 0.0 {
            let (cx, cy, radius) = (globe.center.x as f64, globe.center.y as f64, globe.radius as f64);
            if let Ok(gradient) = context.create_radial_gradient(
                globe.highlight.x as f64,
                globe.highlight.y as f64,
                0.0,
                cx,
                cy,
                radius,
            ) {
                let _ = gradient.add_color_stop(0.0, &globe_fill(globe.shade));
                let _ = gradient.add_color_stop(1.0, GLOBE_EDGE);
                context.set_fill_style_canvas_gradient(&gradient);
            } else {
                context.set_fill_style_str(&globe_fill(globe.shade));
            }
            context.begin_path();
            let _ = context.arc(cx, cy, radius, 0.0, TAU);
            context.fill();
        }

        for line in &frame.meridians {
            let style = format!("rgba(148, 163, 184, {:.3})", 0.1 + 0.4 * line.brightness);
            stroke(context, line, &style);
        }
        for run in &front_rings {
            stroke(context, run, "rgba(255, 255, 255, 0.85)");
        }
    }

    type SharedController = Rc<RefCell<SceneController<CanvasHost>>>;
    type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

    /// Queues the next frame into `slot`. Each frame re-queues itself while the
    /// loop flag stays up.
    fn schedule_frame(controller: SharedController, flag: LoopFlag, slot: FrameSlot) {
        let next = slot.clone();
        let handle = request_animation_frame(move |_timestamp| {
            next.borrow_mut().take();
            if !flag.is_running() {
                return;
            }
            if let Ok(mut scene) = controller.try_borrow_mut() {
                scene.tick();
            }
            if flag.is_running() {
                schedule_frame(controller, flag, next);
            }
        });
        *slot.borrow_mut() = Some(handle);
    }

    /// A running globe: controller, frame loop and resize observer. Dropping
    /// it releases all of them.
    pub struct BrowserScene {
        controller: SharedController,
        frame: FrameSlot,
        observer: web_sys::ResizeObserver,
        _on_resize: Closure<dyn FnMut(js_sys::Array, web_sys::ResizeObserver)>,
    }

    impl BrowserScene {
        pub fn start(container: Option<web_sys::Element>) -> Result<Self, SceneError> {
            let mut rng = rand::rngs::SmallRng::seed_from_u64(entropy_seed());
            let host = container.clone().map(|container| CanvasHost { container });
            let controller = Rc::new(RefCell::new(SceneController::mount(host, &mut rng)?));
            let Some(container) = container else {
                return Err(SceneError::ContainerUnavailable);
            };

            let resize_target = controller.clone();
            let on_resize = Closure::wrap(Box::new(
                move |_entries: js_sys::Array, _observer: web_sys::ResizeObserver| {
                    if let Ok(mut controller) = resize_target.try_borrow_mut() {
                        controller.resize();
                    }
                },
            ) as Box<dyn FnMut(js_sys::Array, web_sys::ResizeObserver)>);
            let observer = web_sys::ResizeObserver::new(on_resize.as_ref().unchecked_ref())
                .map_err(|_| surface_error("resize observer unavailable"))?;
            observer.observe(&container);

            let flag = controller.borrow().loop_flag();
            let frame: FrameSlot = Rc::new(RefCell::new(None));
            schedule_frame(controller.clone(), flag, frame.clone());

            Ok(Self {
                controller,
                frame,
                observer,
                _on_resize: on_resize,
            })
        }
    }

    impl Drop for BrowserScene {
        fn drop(&mut self) {
            if let Ok(mut controller) = self.controller.try_borrow_mut() {
                controller.teardown();
            }
            self.observer.disconnect();
            self.frame.borrow_mut().take();
        }
    }
}

#[component]
pub fn GlobeCanvas() -> Element {
    #[cfg(target_arch = "wasm32")]
    let slot = use_hook(|| Rc::new(RefCell::new(None::<browser::BrowserScene>)));

    #[cfg(target_arch = "wasm32")]
    {
        let slot = slot.clone();
        use_drop(move || {
            slot.borrow_mut().take();
        });
    }

    rsx! {
        div {
            class: "globe-mount",
            onmounted: move |_event| {
                #[cfg(target_arch = "wasm32")]
                {
                    use wasm_bindgen::JsCast;

                    slot.borrow_mut().take();
                    let element = _event.data.as_ref().as_web_event().dyn_into::<web_sys::Element>().ok();
                    match browser::BrowserScene::start(element) {
                        Ok(scene) => {
                            slot.borrow_mut().replace(scene);
                        }
                        Err(err) => tracing::warn!(%err, "globe: setup skipped"),
                    }
                }
            },
        }
    }
}
