use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::animation::scroll::parallax_transform;
use crate::animation::typewriter::{Typewriter, CHAR_INTERVAL_MS, START_DELAY_MS};
use crate::content::HERO_TITLE;
use crate::utils::dom::scroll_to_section;
use crate::utils::subscription::WindowListener;

const PARTICLE_COUNT: usize = 12;

#[derive(Clone, PartialEq)]
struct Particle {
    left: f64,
    delay: f64,
    duration: f64,
}

fn random_particles() -> Vec<Particle> {
    (0..PARTICLE_COUNT)
        .map(|_| Particle {
            left: js_sys::Math::random() * 100.0,
            delay: js_sys::Math::random() * 8.0,
            duration: 4.0 + js_sys::Math::random() * 4.0,
        })
        .collect()
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let title = use_state(|| "");
    let particles = use_state(random_particles);
    let visual_ref = use_node_ref();

    // Typewriter title
    {
        let title = title.clone();
        use_effect_with_deps(
            move |_| {
                let cancelled = Rc::new(Cell::new(false));
                let flag = cancelled.clone();
                spawn_local(async move {
                    TimeoutFuture::new(START_DELAY_MS).await;
                    let mut typewriter = Typewriter::new(HERO_TITLE);
                    while !flag.get() && typewriter.advance() {
                        title.set(typewriter.visible());
                        TimeoutFuture::new(CHAR_INTERVAL_MS).await;
                    }
                });
                move || cancelled.set(true)
            },
            (),
        );
    }

    // Parallax on the visual; writes the style directly to skip re-renders
    {
        let visual_ref = visual_ref.clone();
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::on_scroll(move |y| {
                    if let Some(el) = visual_ref.cast::<HtmlElement>() {
                        let _ = el.set_attribute("style", &parallax_transform(y));
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }

    let to_services = Callback::from(|_: MouseEvent| {
        scroll_to_section("services");
    });
    let to_contact = Callback::from(|_: MouseEvent| {
        scroll_to_section("contact");
    });

    html! {
        <section id="home" class="hero">
            <style>{HERO_CSS}</style>
            <div class="hero-background"></div>
            <div class="hero-particles">
                { for particles.iter().map(|p| html! {
                    <div
                        class="particle"
                        style={format!(
                            "left: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s;",
                            p.left, p.delay, p.duration
                        )}
                    ></div>
                }) }
            </div>
            <div class="hero-inner">
                <div class="hero-text">
                    <h1 class="hero-title">
                        {*title}
                        <span class="caret">{"|"}</span>
                    </h1>
                    <p class="hero-subtitle fade-in-up">
                        {"We are an emerging IT company delivering innovative AI solutions and expert consulting services. Transform your business with the power of artificial intelligence."}
                    </p>
                    <div class="hero-cta-group fade-in-up">
                        <button class="hero-cta primary" onclick={to_services}>
                            <span>{"Our Services"}</span>
                            <i class="fas fa-arrow-right"></i>
                        </button>
                        <button class="hero-cta secondary" onclick={to_contact}>
                            <i class="fas fa-play"></i>
                            <span>{"Get Started"}</span>
                        </button>
                    </div>
                </div>
                <div ref={visual_ref} class="hero-visual">
                    <div class="visual-circle"></div>
                    <div class="float-shape shape-1"></div>
                    <div class="float-shape shape-2"></div>
                    <div class="float-shape shape-3"></div>
                    <div class="float-shape shape-4"></div>
                    <div class="ai-symbol">{"AI"}</div>
                </div>
            </div>
        </section>
    }
}

const HERO_CSS: &str = r#"
    .hero {
        min-height: 100vh;
        position: relative;
        overflow: hidden;
    }
    .hero-background {
        position: absolute;
        inset: 0;
        background: linear-gradient(135deg, #faf5ff, #eff6ff, #e0e7ff);
    }
    .hero-particles {
        position: absolute;
        inset: 0;
        overflow: hidden;
    }
    .particle {
        position: absolute;
        width: 0.5rem;
        height: 0.5rem;
        border-radius: 50%;
        background: #c084fc;
        opacity: 0.3;
        animation-name: bounce;
        animation-iteration-count: infinite;
    }
    .hero-inner {
        position: relative;
        z-index: 10;
        max-width: 72rem;
        margin: 0 auto;
        padding: 8rem 1.5rem 5rem;
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 3rem;
        align-items: center;
    }
    .hero-title {
        font-size: 3.75rem;
        font-weight: 700;
        line-height: 1.2;
        min-height: 9rem;
        background: linear-gradient(90deg, #9333ea, #2563eb, #4f46e5);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .caret {
        animation: pulse 1s infinite;
    }
    .hero-subtitle {
        font-size: 1.25rem;
        color: #4b5563;
        line-height: 1.7;
        animation-delay: 0.5s;
    }
    .hero-cta-group {
        display: flex;
        gap: 1rem;
        margin-top: 2rem;
        animation-delay: 0.7s;
    }
    .hero-cta {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        padding: 1rem 2rem;
        border-radius: 9999px;
        font-weight: 600;
        font-size: 1rem;
        cursor: pointer;
        transition: all 0.3s;
    }
    .hero-cta:hover {
        transform: scale(1.05);
    }
    .hero-cta.primary {
        border: none;
        color: #fff;
        background: linear-gradient(90deg, #9333ea, #2563eb);
    }
    .hero-cta.secondary {
        background: transparent;
        color: #9333ea;
        border: 2px solid #9333ea;
    }
    .hero-cta.secondary:hover {
        background: #9333ea;
        color: #fff;
    }
    .hero-visual {
        position: relative;
        width: 24rem;
        height: 24rem;
        margin: 0 auto;
    }
    .visual-circle {
        position: absolute;
        inset: 0;
        border-radius: 50%;
        opacity: 0.2;
        background: linear-gradient(90deg, #e9d5ff, #bfdbfe);
        animation: pulse 3s infinite;
    }
    .float-shape {
        position: absolute;
        animation: float 6s ease-in-out infinite;
    }
    .shape-1 { top: 4rem; left: 4rem; width: 4rem; height: 4rem; border-radius: 1rem; background: linear-gradient(90deg, #a855f7, #3b82f6); }
    .shape-2 { top: 6rem; right: 4rem; width: 3rem; height: 3rem; border-radius: 0.75rem; background: linear-gradient(90deg, #3b82f6, #6366f1); animation-delay: 2s; }
    .shape-3 { bottom: 4rem; left: 5rem; width: 5rem; height: 5rem; border-radius: 1.5rem; background: linear-gradient(90deg, #6366f1, #a855f7); animation-delay: 4s; }
    .shape-4 { bottom: 6rem; right: 6rem; width: 2rem; height: 2rem; border-radius: 0.5rem; background: linear-gradient(90deg, #c084fc, #f472b6); animation-delay: 1s; }
    .ai-symbol {
        position: absolute;
        top: 50%;
        left: 50%;
        transform: translate(-50%, -50%);
        width: 8rem;
        height: 8rem;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        color: #fff;
        font-size: 2.25rem;
        font-weight: 700;
        background: linear-gradient(90deg, #9333ea, #2563eb);
        animation: pulse 3s infinite;
    }
    @media (max-width: 1024px) {
        .hero-inner {
            grid-template-columns: 1fr;
        }
        .hero-title {
            font-size: 3rem;
        }
    }
    @media (max-width: 640px) {
        .hero-cta-group {
            flex-direction: column;
        }
        .hero-visual {
            width: 18rem;
            height: 18rem;
        }
    }
"#;
