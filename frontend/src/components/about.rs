use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::animation::counter::{tick_all, StatCounter, TICK_MS};
use crate::content::{COMPANY_NAME, STATS, TECH_STACK};
use crate::utils::subscription::VisibilityObserver;

const STATS_THRESHOLD: f64 = 0.5;

#[function_component(About)]
pub fn about() -> Html {
    let stats_ref = use_node_ref();
    let values = use_state(|| vec![0u32; STATS.len()]);

    // Count the stats up once, the first time half the grid is on screen
    {
        let stats_ref = stats_ref.clone();
        let values = values.clone();
        use_effect_with_deps(
            move |_| {
                let cancelled = Rc::new(Cell::new(false));
                let flag = cancelled.clone();
                let observer = stats_ref.cast::<web_sys::Element>().and_then(|grid| {
                    VisibilityObserver::once(&grid, STATS_THRESHOLD, move |_| {
                        spawn_local(async move {
                            let mut counters: Vec<StatCounter> =
                                STATS.iter().map(|s| StatCounter::new(s.target)).collect();
                            loop {
                                TimeoutFuture::new(TICK_MS).await;
                                if flag.get() {
                                    return;
                                }
                                let running = tick_all(&mut counters);
                                values.set(counters.iter().map(StatCounter::value).collect());
                                if !running {
                                    break;
                                }
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
        <section id="about" class="about-section">
            <style>{ABOUT_CSS}</style>
            <div class="about-inner">
                <div class="about-text">
                    <h2>{format!("About {}", COMPANY_NAME)}</h2>
                    <p>{"AsuVens AI is an emerging IT company at the forefront of artificial intelligence innovation. We specialize in delivering cutting-edge AI solutions that transform businesses and drive digital transformation."}</p>
                    <p>{"Our team of expert AI engineers, data scientists, and consultants work collaboratively to create intelligent systems that solve real-world problems and deliver measurable business value."}</p>
                    <p>{"From machine learning algorithms to natural language processing, computer vision to predictive analytics, we bring the latest AI technologies to help your organization stay competitive in the digital age."}</p>
                    <div ref={stats_ref} class="stats-grid">
                        { for STATS.iter().zip(values.iter()).map(|(stat, value)| html! {
                            <div key={stat.label} class="stat-card">
                                <div class="stat-value">{format!("{}{}", value, stat.suffix)}</div>
                                <div class="stat-label">{stat.label}</div>
                            </div>
                        }) }
                    </div>
                </div>
                <div class="tech-visual">
                    <div class="tech-grid">
                        { for TECH_STACK.iter().enumerate().map(|(index, tech)| html! {
                            <div
                                key={tech.name}
                                class="tech-tile"
                                title={tech.name}
                                style={format!("background: {}; animation-delay: {:.1}s;", tech.gradient, index as f64 * 0.2)}
                            >
                                <i class={tech.icon}></i>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

const ABOUT_CSS: &str = r#"
    .about-section {
        padding: 5rem 0;
        background: #fff;
    }
    .about-inner {
        max-width: 72rem;
        margin: 0 auto;
        padding: 0 1.5rem;
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 4rem;
        align-items: center;
    }
    .about-text h2 {
        font-size: 3rem;
        font-weight: 700;
        background: linear-gradient(90deg, #9333ea, #2563eb);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .about-text p {
        color: #4b5563;
        font-size: 1.125rem;
        line-height: 1.7;
        margin-bottom: 1.5rem;
    }
    .stats-grid {
        display: grid;
        grid-template-columns: repeat(2, 1fr);
        gap: 1.5rem;
        margin-top: 3rem;
    }
    .stat-card {
        text-align: center;
        padding: 1.5rem;
        border-radius: 1rem;
        background: linear-gradient(135deg, #faf5ff, #eff6ff);
        transition: all 0.3s;
    }
    .stat-card:hover {
        transform: scale(1.05);
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    }
    .stat-value {
        font-size: 2.25rem;
        font-weight: 700;
        margin-bottom: 0.5rem;
        background: linear-gradient(90deg, #9333ea, #2563eb);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .stat-label {
        color: #4b5563;
        font-weight: 500;
    }
    .tech-visual {
        display: flex;
        justify-content: center;
        align-items: center;
    }
    .tech-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 1rem;
        width: 20rem;
        height: 20rem;
    }
    .tech-tile {
        border-radius: 1rem;
        display: flex;
        align-items: center;
        justify-content: center;
        color: #fff;
        font-size: 1.75rem;
        cursor: pointer;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
        animation: pulse 3s infinite;
        transition: transform 0.3s;
    }
    .tech-tile:hover {
        transform: scale(1.1) rotate(6deg);
    }
    @media (max-width: 1024px) {
        .about-inner {
            grid-template-columns: 1fr;
        }
        .about-text h2 {
            font-size: 2.25rem;
        }
    }
"#;
