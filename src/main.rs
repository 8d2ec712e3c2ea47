//! Bounce Form entry point
//!
//! Handles platform-specific initialization and runs the animation loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::convert::FromWasmAbi;
    use wasm_bindgen::prelude::*;
    use web_sys::{EventTarget, HtmlCanvasElement, KeyboardEvent};

    use bounce_form::layout::CanvasSize;
    use bounce_form::platform::Dom;
    use bounce_form::renderer::{BACKENDS, RenderError, SdfRenderState};
    use bounce_form::sim::FrameReport;
    use bounce_form::{Axis, BounceDemo, FieldId, Settings};

    /// Page instance holding all state
    struct App {
        demo: BounceDemo,
        dom: Dom,
        render_state: Option<SdfRenderState>,
        /// Pending requestAnimationFrame handle
        frame_id: Option<i32>,
    }

    impl App {
        /// Redraw the canvas from the current state
        fn draw(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(self.demo.state(), self.demo.settings()) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Write the rounded position back into px/py
        fn show_frame(&self, report: &FrameReport) {
            let (px, py) = report.display_fields();
            self.dom.write_field(FieldId::PosX, &px);
            self.dom.write_field(FieldId::PosY, &py);
        }

        /// Advance one frame. Returns false once the demo is no longer running.
        fn step(&mut self) -> bool {
            match self.demo.frame() {
                Some(report) => {
                    self.show_frame(&report);
                    self.draw();
                    true
                }
                None => false,
            }
        }

        fn apply_canvas_size(&mut self, size: CanvasSize) {
            self.dom.set_canvas_size(size);
            if let Some(ref mut render_state) = self.render_state {
                render_state.resize(size.width, size.height);
            }
        }

        /// Inputs and start button follow the running state
        fn sync_controls(&self) {
            self.dom.set_controls_disabled(!self.demo.controls_enabled());
        }

        fn cancel_frame(&mut self) {
            if let Some(id) = self.frame_id.take() {
                if let Err(e) = self.dom.window.cancel_animation_frame(id) {
                    log::warn!("cancelAnimationFrame failed: {:?}", e);
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Bounce Form starting...");

        let dom = match Dom::find() {
            Ok(dom) => dom,
            Err(e) => {
                log::error!("Cannot start: {}", e);
                return;
            }
        };

        let settings = Settings::load();
        let mut demo = BounceDemo::new(settings);
        dom.write_form(&demo.initial_fields());

        demo.resize(dom.viewport_width());
        let size = demo.canvas();
        dom.set_canvas_size(size);

        let render_state = match init_renderer(&dom.canvas, size).await {
            Ok(render_state) => Some(render_state),
            Err(e) => {
                log::error!("Renderer unavailable, canvas will stay blank: {}", e);
                None
            }
        };

        let app = Rc::new(RefCell::new(App {
            demo,
            dom,
            render_state,
            frame_id: None,
        }));
        app.borrow_mut().draw();

        setup_form_handlers(app.clone());
        setup_position_handlers(app.clone());
        setup_stop_button(app.clone());
        setup_keyboard(app.clone());
        setup_resize(app);

        log::info!("Bounce Form ready");
    }

    async fn init_renderer(
        canvas: &HtmlCanvasElement,
        size: CanvasSize,
    ) -> Result<SdfRenderState, RenderError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: BACKENDS,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| RenderError::Surface(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| RenderError::Adapter(e.to_string()))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        SdfRenderState::new(surface, &adapter, size.width, size.height).await
    }

    /// Attach an event listener for the lifetime of the page
    fn listen<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static)
    where
        E: FromWasmAbi + 'static,
    {
        let closure = Closure::<dyn FnMut(E)>::new(handler);
        if let Err(e) =
            target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::error!("Could not listen for {}: {:?}", event, e);
        }
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = app.borrow().dom.window.clone();
        let next = app.clone();
        let closure = Closure::once(move |_time: f64| {
            animation_frame(next);
        });
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => app.borrow_mut().frame_id = Some(id),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
        closure.forget();
    }

    fn animation_frame(app: Rc<RefCell<App>>) {
        let running = {
            let mut a = app.borrow_mut();
            a.frame_id = None;
            a.step()
        };

        if running {
            request_animation_frame(app);
        }
    }

    fn setup_form_handlers(app: Rc<RefCell<App>>) {
        let form = app.borrow().dom.form.clone();
        listen(&form, "submit", move |event: web_sys::Event| {
            // Never let the browser navigate
            event.prevent_default();

            let (dom, outcome) = {
                let mut a = app.borrow_mut();
                let values = a.dom.read_form();
                let outcome = a.demo.submit(&values);
                (a.dom.clone(), outcome)
            };

            let started = match outcome {
                Ok(started) => started,
                Err(e) => {
                    log::debug!("Submit rejected: {}", e);
                    dom.alert(&e.alert_message());
                    return;
                }
            };

            dom.mark_validated();
            for reset in &started.resets {
                let (field, text) = BounceDemo::reset_field(reset);
                dom.alert(&reset.alert_message());
                dom.write_field(field, &text);
            }

            let mut a = app.borrow_mut();
            a.draw();
            if started.started {
                a.sync_controls();
                let running = a.step();
                drop(a);
                if running {
                    request_animation_frame(app.clone());
                }
            }
        });
    }

    fn setup_position_handlers(app: Rc<RefCell<App>>) {
        for axis in [Axis::X, Axis::Y] {
            let input = app.borrow().dom.input(axis.position_field()).clone();

            // Live typing moves the ball while idle
            {
                let app = app.clone();
                let input_clone = input.clone();
                listen(&input, "input", move |_event: web_sys::Event| {
                    let mut a = app.borrow_mut();
                    if a.demo.preview_position(axis, &input_clone.value()) {
                        a.draw();
                    }
                });
            }

            // Committed value gets the full non-negative check
            {
                let app = app.clone();
                let input_clone = input.clone();
                listen(&input, "change", move |_event: web_sys::Event| {
                    let (dom, reset) = {
                        let mut a = app.borrow_mut();
                        if a.demo.is_running() {
                            return;
                        }
                        let reset = a.demo.commit_position(axis, &input_clone.value());
                        (a.dom.clone(), reset)
                    };

                    if let Some(reset) = reset {
                        dom.alert(&reset.alert_message());
                        let (field, text) = BounceDemo::reset_field(&reset);
                        dom.write_field(field, &text);
                    }
                    app.borrow_mut().draw();
                });
            }
        }
    }

    fn setup_stop_button(app: Rc<RefCell<App>>) {
        let button = app.borrow().dom.stop_button.clone();
        listen(&button, "click", move |_event: web_sys::MouseEvent| {
            let mut a = app.borrow_mut();
            a.demo.stop();
            a.cancel_frame();
            a.sync_controls();
            a.draw();
        });
    }

    fn setup_keyboard(app: Rc<RefCell<App>>) {
        let window = app.borrow().dom.window.clone();
        listen(&window, "keydown", move |event: KeyboardEvent| {
            let mut a = app.borrow_mut();
            if a.demo.key(&event.key()).is_some() {
                let (vx, vy) = a.demo.velocity_fields();
                a.dom.write_field(FieldId::VelX, &vx);
                a.dom.write_field(FieldId::VelY, &vy);
            }
        });
    }

    fn setup_resize(app: Rc<RefCell<App>>) {
        let window = app.borrow().dom.window.clone();
        listen(&window, "resize", move |_event: web_sys::Event| {
            let mut a = app.borrow_mut();
            let width = a.dom.viewport_width();
            if let Some(size) = a.demo.resize(width) {
                a.apply_canvas_size(size);
            }
            a.draw();
        });
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Bounce Form (native) starting...");
    log::info!("The page itself needs a browser - run with `trunk serve` for the web version");

    println!("\nRunning headless bounce...");
    headless_bounce();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive the demo without a page: ball at (270, 100) moving right at 5/frame
#[cfg(not(target_arch = "wasm32"))]
fn headless_bounce() {
    use bounce_form::{BounceDemo, FormValues};

    let mut demo = BounceDemo::default();
    let form = FormValues::new("270", "100", "5", "0");
    if let Err(e) = demo.submit(&form) {
        log::error!("Submit rejected: {}", e);
        return;
    }

    for frame in 1..=6 {
        let Some(report) = demo.frame() else {
            break;
        };
        let (px, py) = report.display_fields();
        println!(
            "frame {}: pos=({}, {}) vel=({}, {}){}",
            frame,
            px,
            py,
            report.vel.x,
            report.vel.y,
            if report.bounce.any() { " bounce" } else { "" }
        );
    }

    demo.stop();
    match serde_json::to_string(demo.state()) {
        Ok(json) => println!("✓ Stopped: {}", json),
        Err(e) => log::warn!("Could not serialize state: {}", e),
    }
}
