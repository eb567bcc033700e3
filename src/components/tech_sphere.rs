//! Tech Sphere Component
//!
//! Canvas host for the rotating point cloud. The canvas fills its parent and
//! follows window resizes.

use leptos::ev;
use leptos::html::Canvas;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::context::use_widget_context;
use crate::sphere::{draw, random_channel, Camera, RenderLoop, SphereScene};

/// Match the canvas backing store to its parent's box. Returns the size in device pixels.
fn fit_canvas(canvas: &HtmlCanvasElement, camera: &mut Camera) -> Option<(f64, f64)> {
    let parent = canvas.parent_element()?;
    let width = f64::from(parent.client_width());
    let height = f64::from(parent.client_height());
    let ratio = web_sys::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);

    canvas.set_width((width * ratio) as u32);
    canvas.set_height((height * ratio) as u32);
    camera.resize(width, height);
    Some((width * ratio, height * ratio))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

#[component]
pub fn TechSphere(#[prop(into)] technologies: Signal<Vec<String>>) -> impl IntoView {
    let config = use_widget_context().config();
    let canvas_ref = NodeRef::<Canvas>::new();

    let scene = StoredValue::new(SphereScene::new(config.sphere_radius));
    let camera = StoredValue::new(Camera::default());
    let viewport = StoredValue::new((0.0_f64, 0.0_f64));
    let render_loop = StoredValue::new_local(None::<RenderLoop>);
    let last_pointer = StoredValue::new(None::<(i32, i32)>);

    // Rebuild the cloud whenever the technology list changes
    Effect::new(move |_| {
        let count = config.point_count(technologies.with(|t| t.len()));
        scene.update_value(|s| s.rebuild(count, random_channel));
        log::debug!("[SPHERE] Rebuilt with {} points", count);
    });

    let refit = move || {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let size = camera.try_update_value(|c| fit_canvas(&canvas, c)).flatten();
        if let Some(size) = size {
            viewport.set_value(size);
        }
    };

    // Start drawing once the canvas is mounted
    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if render_loop.with_value(|l| l.is_some()) {
            return;
        }
        let Some(ctx) = context_2d(&canvas) else {
            log::error!("[SPHERE] 2d context unavailable");
            return;
        };
        refit();

        let frame = RenderLoop::new(move || {
            scene.update_value(|s| s.tick());
            let (width, height) = viewport.get_value();
            scene.with_value(|s| camera.with_value(|c| draw(&ctx, s, c, width, height)));
        });
        frame.start();
        render_loop.set_value(Some(frame));
    });

    let resize_handle = window_event_listener(ev::resize, move |_| refit());
    on_cleanup(move || {
        resize_handle.remove();
        if let Some(Some(frame)) = render_loop.try_update_value(|l| l.take()) {
            frame.stop();
        }
    });

    let on_mousedown = move |ev: ev::MouseEvent| {
        last_pointer.set_value(Some((ev.client_x(), ev.client_y())));
    };
    let on_mousemove = move |ev: ev::MouseEvent| {
        let Some((x, y)) = last_pointer.get_value() else {
            return;
        };
        let (nx, ny) = (ev.client_x(), ev.client_y());
        scene.update_value(|s| s.drag(f64::from(nx - x), f64::from(ny - y)));
        last_pointer.set_value(Some((nx, ny)));
    };
    let release = move |_: ev::MouseEvent| last_pointer.set_value(None);

    view! {
        <div class="tech-sphere w-full h-96 relative">
            <canvas
                node_ref=canvas_ref
                class="absolute inset-0 w-full h-full cursor-grab"
                on:mousedown=on_mousedown
                on:mousemove=on_mousemove
                on:mouseup=release
                on:mouseleave=release
            />
        </div>
    }
}
