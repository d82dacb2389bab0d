//! Presentational building blocks. None of these hold business state.

use crate::notify::{Toasts, use_notifier};
use dioxus::prelude::*;
use rand::Rng;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div { class: "loading-screen",
            div { class: "spinner" }
            p { class: "loading-text", "Loading..." }
        }
    }
}

#[component]
pub fn InlineSpinner() -> Element {
    rsx! {
        span { class: "spinner spinner-small" }
    }
}

#[component]
pub fn GlassCard(
    children: Element,
    #[props(default)] class: String,
    #[props(default)] variant: String,
    #[props(default = true)] hover: bool,
    #[props(default)] delay: u32,
) -> Element {
    let base = match variant.as_str() {
        "hover" => "card-hover",
        "primary" => "glass card-primary",
        "accent" => "glass card-accent",
        _ => "card-glass",
    };
    let lift = if hover { "card-lift" } else { "" };
    let delay_ms = delay * 100;

    rsx! {
        div {
            class: "{base} {lift} fade-up {class}",
            style: "animation-delay: {delay_ms}ms;",
            {children}
        }
    }
}

#[component]
pub fn AnimatedButton(
    children: Element,
    onclick: EventHandler<MouseEvent>,
    #[props(default)] variant: String,
    #[props(default)] disabled: bool,
    #[props(default)] class: String,
) -> Element {
    let base = match variant.as_str() {
        "secondary" => "btn-secondary",
        "ghost" => "btn-ghost",
        _ => "btn-primary",
    };

    rsx! {
        button {
            r#type: "button",
            class: "{base} btn-animated {class}",
            disabled,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

#[component]
pub fn AnimatedGradient(#[props(default)] class: String) -> Element {
    rsx! {
        div { class: "animated-gradient {class}" }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub duration: f64,
    pub delay: f64,
}

impl Particle {
    fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.1}px; height: {:.1}px; animation-duration: {:.1}s; animation-delay: {:.1}s;",
            self.x, self.y, self.size, self.size, self.duration, self.delay
        )
    }
}

const PARTICLE_COUNT: usize = 30;

pub fn scatter_particles<R: Rng>(rng: &mut R, count: usize) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            x: rng.gen_range(0.0..100.0),
            y: rng.gen_range(0.0..100.0),
            size: rng.gen_range(1.0..4.0),
            duration: rng.gen_range(5.0..15.0),
            delay: rng.gen_range(0.0..3.0),
        })
        .collect()
}

const ORBS: &[(u32, u32, u32, &str)] = &[
    (200, 10, 20, "orb orb-purple"),
    (150, 80, 60, "orb orb-pink"),
    (300, 60, 80, "orb orb-soft"),
];

#[component]
pub fn ParticlesBackground() -> Element {
    let particles = use_hook(|| scatter_particles(&mut rand::thread_rng(), PARTICLE_COUNT));

    rsx! {
        div { class: "particles", aria_hidden: "true",
            for (index , p) in particles.iter().enumerate() {
                div {
                    key: "particle-{index}",
                    class: "particle",
                    style: p.style(),
                }
            }
            for (index , (size , x , y , class)) in ORBS.iter().enumerate() {
                div {
                    key: "orb-{index}",
                    class: "{class}",
                    style: "width: {size}px; height: {size}px; left: {x}%; top: {y}%;",
                }
            }
        }
    }
}

#[component]
pub fn Toaster() -> Element {
    let toasts = use_context::<Signal<Toasts>>();
    let notifier = use_notifier();

    rsx! {
        div { class: "toaster",
            for toast in toasts.read().items().iter().cloned() {
                div {
                    key: "{toast.id}",
                    class: "{toast.level.class()}",
                    role: "status",
                    onclick: move |_| notifier.dismiss(toast.id),
                    "{toast.text}"
                }
            }
        }
    }
}
