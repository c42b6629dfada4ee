use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::animation::scroll::CARD_STAGGER_MS;
use crate::content::SERVICES;
use crate::utils::subscription::VisibilityObserver;

const REVEAL_THRESHOLD: f64 = 0.1;

#[function_component(Services)]
pub fn services() -> Html {
    let grid_ref = use_node_ref();
    // number of cards faded in so far
    let revealed = use_state(|| 0usize);

    {
        let grid_ref = grid_ref.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let cancelled = Rc::new(Cell::new(false));
                let flag = cancelled.clone();
                let observer = grid_ref.cast::<web_sys::Element>().and_then(|grid| {
                    VisibilityObserver::once(&grid, REVEAL_THRESHOLD, move |_| {
                        spawn_local(async move {
                            for shown in 1..=SERVICES.len() {
                                if flag.get() {
                                    return;
                                }
                                revealed.set(shown);
                                TimeoutFuture::new(CARD_STAGGER_MS).await;
                            }
                        });
                    })
                });
                move || {
                    cancelled.set(true);
                    drop(observer);
                }
            },
            (),
        );
    }

    html! {
        <section id="services" class="services-section">
            <style>{SERVICES_CSS}</style>
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"Our AI Solutions"}</h2>
                    <p>{"We offer comprehensive AI services designed to revolutionize your business operations and drive innovation across industries."}</p>
                </div>
                <div ref={grid_ref} class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <div
                            key={service.title}
                            class={classes!("service-card", (index < *revealed).then_some("visible"))}
                        >
                            <div class="card-overlay"></div>
                            <div class="card-topline" style={format!("background: {};", service.gradient)}></div>
                            <div class="card-body">
                                <div class="card-icon" style={format!("background: {};", service.gradient)}>
                                    <i class={service.icon}></i>
                                </div>
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

const SERVICES_CSS: &str = r#"
    .services-section {
        padding: 5rem 0;
        background: #f9fafb;
    }
    .section-inner {
        max-width: 72rem;
        margin: 0 auto;
        padding: 0 1.5rem;
    }
    .section-heading {
        text-align: center;
        margin-bottom: 4rem;
    }
    .section-heading h2 {
        font-size: 3rem;
        font-weight: 700;
        margin-bottom: 1.5rem;
        background: linear-gradient(90deg, #9333ea, #2563eb);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .section-heading p {
        font-size: 1.25rem;
        color: #4b5563;
        max-width: 48rem;
        margin: 0 auto;
        line-height: 1.7;
    }
    .services-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }
    .service-card {
        position: relative;
        overflow: hidden;
        background: #fff;
        border-radius: 1rem;
        padding: 2rem;
        cursor: pointer;
        opacity: 0;
        transform: translateY(2rem);
        transition: opacity 0.6s ease, transform 0.6s ease, box-shadow 0.5s;
    }
    .service-card.visible {
        opacity: 1;
        transform: translateY(0);
    }
    .service-card:hover {
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
    }
    .card-overlay {
        position: absolute;
        inset: 0;
        opacity: 0;
        background: linear-gradient(135deg, rgba(168, 85, 247, 0.05), rgba(59, 130, 246, 0.05));
        transition: opacity 0.3s;
    }
    .service-card:hover .card-overlay {
        opacity: 1;
    }
    .card-topline {
        position: absolute;
        top: 0;
        left: 0;
        width: 0;
        height: 4px;
        transition: width 0.5s;
    }
    .service-card:hover .card-topline {
        width: 100%;
    }
    .card-body {
        position: relative;
        z-index: 1;
    }
    .card-icon {
        width: 4rem;
        height: 4rem;
        border-radius: 1rem;
        display: flex;
        align-items: center;
        justify-content: center;
        color: #fff;
        font-size: 1.75rem;
        margin-bottom: 1.5rem;
        transition: transform 0.3s;
    }
    .service-card:hover .card-icon {
        transform: scale(1.1);
    }
    .card-body h3 {
        font-size: 1.5rem;
        font-weight: 700;
        color: #111827;
        margin-bottom: 1rem;
        transition: color 0.3s;
    }
    .service-card:hover h3 {
        color: #9333ea;
    }
    .card-body p {
        color: #4b5563;
        line-height: 1.7;
    }
    @media (max-width: 1024px) {
        .services-grid {
            grid-template-columns: repeat(2, 1fr);
        }
    }
    @media (max-width: 768px) {
        .services-grid {
            grid-template-columns: 1fr;
        }
        .section-heading h2 {
            font-size: 2.25rem;
        }
    }
"#;
