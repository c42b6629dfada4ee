use yew::prelude::*;

use crate::animation::scroll::is_scrolled;
use crate::content::{COMPANY_NAME, NAV_ITEMS};
use crate::utils::dom::scroll_to_section;
use crate::utils::subscription::WindowListener;

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let scrolled = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::on_scroll(move |y| scrolled.set(is_scrolled(y)));
                move || drop(listener)
            },
            (),
        );
    }

    let go_to = {
        let menu_open = menu_open.clone();
        Callback::from(move |id: &'static str| {
            if scroll_to_section(id) {
                menu_open.set(false);
            }
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let nav_links = |class: &'static str| {
        NAV_ITEMS
            .iter()
            .map(|item| {
                let go_to = go_to.clone();
                let id = item.id;
                html! {
                    <li key={id}>
                        <button class={class} onclick={Callback::from(move |_| go_to.emit(id))}>
                            {item.label}
                        </button>
                    </li>
                }
            })
            .collect::<Html>()
    };

    let logo_click = {
        let go_to = go_to.clone();
        Callback::from(move |_| go_to.emit("home"))
    };

    html! {
        <header class={classes!("site-header", (*scrolled).then_some("scrolled"))}>
            <style>{HEADER_CSS}</style>
            <nav class="header-nav">
                <div class="header-row">
                    <button class="header-logo" onclick={logo_click}>
                        <span class="logo-badge"><i class="fas fa-brain"></i></span>
                        <span class="logo-text">{COMPANY_NAME}</span>
                    </button>
                    <ul class="desktop-links">
                        { nav_links("nav-link") }
                    </ul>
                    <button class="menu-toggle" aria-label="Toggle menu" onclick={toggle_menu}>
                        if *menu_open {
                            <i class="fas fa-xmark"></i>
                        } else {
                            <i class="fas fa-bars"></i>
                        }
                    </button>
                </div>
                <div class={classes!("mobile-links", (*menu_open).then_some("open"))}>
                    <ul>
                        { nav_links("mobile-link") }
                    </ul>
                </div>
            </nav>
        </header>
    }
}

const HEADER_CSS: &str = r#"
    .site-header {
        position: fixed;
        top: 0;
        width: 100%;
        z-index: 50;
        background: rgba(255, 255, 255, 0.95);
        backdrop-filter: blur(12px);
        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.08);
        transition: all 0.3s ease;
    }
    .site-header.scrolled {
        background: rgba(255, 255, 255, 0.98);
        backdrop-filter: blur(16px);
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.12);
    }
    .header-nav {
        max-width: 72rem;
        margin: 0 auto;
        padding: 1rem 1.5rem;
    }
    .header-row {
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .header-logo {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        background: none;
        border: none;
        cursor: pointer;
        font-size: 1.5rem;
        font-weight: 700;
        transition: transform 0.2s;
    }
    .header-logo:hover {
        transform: scale(1.05);
    }
    .logo-badge {
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        color: #fff;
        background: linear-gradient(90deg, #a855f7, #3b82f6);
    }
    .logo-text {
        background: linear-gradient(90deg, #9333ea, #2563eb);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .desktop-links {
        display: flex;
        gap: 2rem;
        list-style: none;
        margin: 0;
        padding: 0;
    }
    .nav-link, .mobile-link {
        background: none;
        border: none;
        cursor: pointer;
        color: #374151;
        font-weight: 500;
        font-size: 1rem;
        transition: color 0.3s;
    }
    .nav-link:hover, .mobile-link:hover {
        color: #9333ea;
    }
    .menu-toggle {
        display: none;
        background: none;
        border: none;
        padding: 0.5rem;
        font-size: 1.25rem;
        border-radius: 0.5rem;
        cursor: pointer;
    }
    .mobile-links {
        display: none;
        max-height: 0;
        opacity: 0;
        overflow: hidden;
        transition: all 0.3s ease;
    }
    .mobile-links ul {
        list-style: none;
        padding: 0.5rem 0;
        margin: 0;
    }
    .mobile-link {
        width: 100%;
        text-align: left;
        padding: 0.5rem 1rem;
    }
    @media (max-width: 768px) {
        .desktop-links {
            display: none;
        }
        .menu-toggle, .mobile-links {
            display: block;
        }
        .mobile-links.open {
            max-height: 16rem;
            opacity: 1;
            margin-top: 1rem;
        }
    }
"#;
