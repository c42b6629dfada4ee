use chrono::Datelike;
use yew::prelude::*;

use crate::content::{COMPANY_LINKS, COMPANY_NAME, CONTACT_INFO, OFFICE_ADDRESS, SERVICES, SOCIAL_LINKS};
use crate::utils::dom::scroll_to_section;

fn scroll_button(label: &'static str, target: &'static str) -> Html {
    let onclick = Callback::from(move |_: MouseEvent| {
        scroll_to_section(target);
    });
    html! {
        <li key={label}>
            <button class="footer-link" onclick={onclick}>{label}</button>
        </li>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let current_year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <style>{FOOTER_CSS}</style>
            <div class="footer-inner">
                <div class="footer-grid">
                    <div class="footer-column">
                        <div class="footer-brand">
                            <span class="brand-badge"><i class="fas fa-brain"></i></span>
                            <span class="gradient-text">{COMPANY_NAME}</span>
                        </div>
                        <p class="footer-blurb">
                            {"Cutting-edge AI solutions and expert consulting services for the modern business landscape."}
                        </p>
                        <div class="social-links">
                            { for SOCIAL_LINKS.iter().map(|social| html! {
                                <a
                                    key={social.label}
                                    href={social.href}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label={social.label}
                                >
                                    <i class={social.icon}></i>
                                </a>
                            }) }
                        </div>
                    </div>
                    <div class="footer-column">
                        <h3 class="gradient-text">{"Services"}</h3>
                        <ul>
                            { for SERVICES.iter().map(|s| scroll_button(s.title, "services")) }
                        </ul>
                    </div>
                    <div class="footer-column">
                        <h3 class="gradient-text">{"Company"}</h3>
                        <ul>
                            { for COMPANY_LINKS.iter().map(|link| scroll_button(link.label, link.id)) }
                        </ul>
                    </div>
                    <div class="footer-column">
                        <h3 class="gradient-text">{"Contact Info"}</h3>
                        <div class="footer-contact">
                            <div><i class="fas fa-envelope"></i><span>{CONTACT_INFO[0].content}</span></div>
                            <div><i class="fas fa-phone"></i><span>{CONTACT_INFO[1].content}</span></div>
                            <div>
                                <i class="fas fa-location-dot"></i>
                                <div class="address">
                                    { for OFFICE_ADDRESS.iter().map(|line| html! { <span>{*line}</span> }) }
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{format!("© {} {}. All rights reserved.", current_year, COMPANY_NAME)}</p>
                </div>
            </div>
        </footer>
    }
}

const FOOTER_CSS: &str = r#"
    .site-footer {
        background: #111827;
        color: #fff;
    }
    .footer-inner {
        max-width: 72rem;
        margin: 0 auto;
        padding: 4rem 1.5rem;
    }
    .footer-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 2rem;
    }
    .footer-column {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }
    .footer-column ul {
        list-style: none;
        padding: 0;
        margin: 0;
        display: flex;
        flex-direction: column;
        gap: 0.75rem;
    }
    .gradient-text {
        font-weight: 700;
        background: linear-gradient(90deg, #c084fc, #60a5fa);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .footer-column h3 {
        font-size: 1.25rem;
        margin: 0;
    }
    .footer-brand {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        font-size: 1.5rem;
    }
    .brand-badge {
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.1rem;
        background: linear-gradient(90deg, #a855f7, #3b82f6);
    }
    .footer-blurb {
        color: #9ca3af;
        line-height: 1.7;
    }
    .social-links {
        display: flex;
        gap: 1rem;
    }
    .social-links a {
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        color: #9ca3af;
        background: #1f2937;
        transition: all 0.3s;
    }
    .social-links a:hover {
        color: #c084fc;
        transform: scale(1.1);
    }
    .footer-link {
        background: none;
        border: none;
        padding: 0;
        cursor: pointer;
        text-align: left;
        color: #9ca3af;
        font-size: 1rem;
        transition: color 0.2s;
    }
    .footer-link:hover {
        color: #c084fc;
    }
    .footer-contact {
        display: flex;
        flex-direction: column;
        gap: 1rem;
        color: #9ca3af;
    }
    .footer-contact > div {
        display: flex;
        align-items: flex-start;
        gap: 0.75rem;
    }
    .address {
        display: flex;
        flex-direction: column;
    }
    .footer-bottom {
        border-top: 1px solid #1f2937;
        margin-top: 3rem;
        padding-top: 2rem;
        text-align: center;
        color: #6b7280;
    }
    @media (max-width: 1024px) {
        .footer-grid {
            grid-template-columns: repeat(2, 1fr);
        }
    }
    @media (max-width: 640px) {
        .footer-grid {
            grid-template-columns: 1fr;
        }
    }
"#;
