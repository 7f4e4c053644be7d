//! Floating Shapes
//!
//! Decorative shapes behind the hero that drift to a new random offset on
//! their own interval.

use dioxus::prelude::*;
use portfolio_core::ShapeJitter;

#[component]
pub fn FloatingShapes(count: usize) -> Element {
    rsx! {
        div { class: "hero-shapes", "aria-hidden": "true",
            for index in 0..count {
                FloatingShape { key: "{index}", index }
            }
        }
    }
}

#[component]
fn FloatingShape(index: usize) -> Element {
    let mut jitter = use_signal(ShapeJitter::default);

    use_effect(move || {
        spawn(async move {
            let interval = ShapeJitter::interval(index);
            loop {
                tokio::time::sleep(interval).await;
                jitter.set(ShapeJitter::sample(&mut rand::rng()));
            }
        });
    });

    let class = format!("floating-shape shape-{}", index + 1);
    let transform = jitter.read().transform();

    rsx! {
        div {
            class: "{class}",
            style: "transform: {transform};",
        }
    }
}
