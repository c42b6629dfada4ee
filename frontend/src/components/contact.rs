use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact::dispatch::EmailJsClient;
use crate::contact::form::Field;
use crate::contact::submission::{submit, SubmissionFlow, SubmissionState, SubmitOutcome, ACK_DISPLAY};
use crate::content::CONTACT_INFO;
use crate::utils::dom::alert;
use crate::utils::timer::AckTimer;

const FAILURE_NOTICE: &str = "Sorry, your message could not be sent. Please try again in a moment.";

fn field_value(field: Field, e: &InputEvent) -> String {
    match field {
        Field::Message => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
        _ => e.target_unchecked_into::<HtmlInputElement>().value(),
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let flow = use_mut_ref(SubmissionFlow::default);
    let timer = use_mut_ref(AckTimer::default);
    let dispatcher: Rc<EmailJsClient> = use_memo(|_| EmailJsClient::from_build_env(), ());
    let update = use_force_update();

    // A pending reset must not fire into an unmounted form
    {
        let timer = timer.clone();
        use_effect_with_deps(move |_| move || timer.borrow_mut().close(), ());
    }

    let oninput = |field: Field| {
        let flow = flow.clone();
        let update = update.clone();
        Callback::from(move |e: InputEvent| {
            flow.borrow_mut().edit(field, field_value(field, &e));
            update.force_update();
        })
    };

    let onsubmit = {
        let flow = flow.clone();
        let timer = timer.clone();
        let update = update.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let flow = flow.clone();
            let timer = timer.clone();
            let update = update.clone();
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                let outcome = submit(&flow, dispatcher.as_ref(), || update.force_update()).await;
                match outcome {
                    SubmitOutcome::Delivered(ticket) => {
                        let flow = flow.clone();
                        let update = update.clone();
                        timer.borrow_mut().schedule(ACK_DISPLAY, move || {
                            if flow.borrow_mut().acknowledgement_elapsed(ticket) {
                                update.force_update();
                            }
                        });
                    }
                    SubmitOutcome::Failed(_) => alert(FAILURE_NOTICE),
                    SubmitOutcome::Invalid | SubmitOutcome::Busy => {}
                }
            });
        })
    };

    let snapshot = flow.borrow();
    let form_body = if snapshot.state() == SubmissionState::Submitted {
        html! {
            <div class="ack-panel">
                <i class="fas fa-circle-check ack-icon"></i>
                <h3>{"Message Sent!"}</h3>
                <p>{"Thank you for your message. We'll get back to you soon."}</p>
            </div>
        }
    } else {
        let sending = snapshot.is_in_flight();
        html! {
            <form class="contact-form" onsubmit={onsubmit} novalidate=true>
                { for Field::ALL.iter().map(|&field| {
                    let error = snapshot.errors().get(field);
                    let class = classes!("form-input", error.map(|_| "has-error"));
                    let value = snapshot.data().get(field).to_string();
                    html! {
                        <div class="form-group" key={field.key()}>
                            <label for={field.key()}>{format!("{} *", field.label())}</label>
                            if field == Field::Message {
                                <textarea
                                    id={field.key()}
                                    name={field.key()}
                                    rows="5"
                                    class={class}
                                    placeholder={field.placeholder()}
                                    value={value}
                                    oninput={oninput(field)}
                                />
                            } else {
                                <input
                                    type={field.input_type()}
                                    id={field.key()}
                                    name={field.key()}
                                    class={class}
                                    placeholder={field.placeholder()}
                                    value={value}
                                    oninput={oninput(field)}
                                />
                            }
                            if let Some(error) = error {
                                <p class="field-error">{error.to_string()}</p>
                            }
                        </div>
                    }
                }) }
                <button type="submit" class="submit-button" disabled={sending}>
                    if sending {
                        <i class="fas fa-spinner fa-spin"></i>
                        <span>{"Sending..."}</span>
                    } else {
                        <i class="fas fa-paper-plane"></i>
                        <span>{"Send Message"}</span>
                    }
                </button>
            </form>
        }
    };

    html! {
        <section id="contact" class="contact-section">
            <style>{CONTACT_CSS}</style>
            <div class="contact-inner">
                <div class="contact-info">
                    <div>
                        <h2>{"Get In Touch"}</h2>
                        <p class="contact-intro">
                            {"Ready to transform your business with AI? Contact us today to discuss your project requirements and discover how we can help you achieve your goals."}
                        </p>
                    </div>
                    <div class="info-cards">
                        { for CONTACT_INFO.iter().map(|info| html! {
                            <div key={info.title} class="info-card">
                                <div class="info-icon" style={format!("background: {};", info.gradient)}>
                                    <i class={info.icon}></i>
                                </div>
                                <div>
                                    <h3>{info.title}</h3>
                                    <p>{info.content}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
                <div class="form-card">
                    { form_body }
                </div>
            </div>
        </section>
    }
}

const CONTACT_CSS: &str = r#"
    .contact-section {
        padding: 5rem 0;
        color: #fff;
        background: linear-gradient(135deg, #9333ea, #2563eb, #4338ca);
    }
    .contact-inner {
        max-width: 72rem;
        margin: 0 auto;
        padding: 0 1.5rem;
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 4rem;
    }
    .contact-info h2 {
        font-size: 3rem;
        font-weight: 700;
        margin-bottom: 1.5rem;
    }
    .contact-intro {
        font-size: 1.25rem;
        color: #dbeafe;
        line-height: 1.7;
    }
    .info-cards {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
        margin-top: 2rem;
    }
    .info-card {
        display: flex;
        align-items: center;
        gap: 1rem;
        padding: 1rem;
        border-radius: 0.75rem;
        background: rgba(255, 255, 255, 0.1);
        backdrop-filter: blur(12px);
        transition: all 0.3s;
    }
    .info-card:hover {
        background: rgba(255, 255, 255, 0.2);
        transform: scale(1.05);
    }
    .info-icon {
        width: 3rem;
        height: 3rem;
        flex-shrink: 0;
        border-radius: 0.5rem;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.25rem;
    }
    .info-card h3 {
        font-size: 1.125rem;
        font-weight: 600;
        margin: 0;
    }
    .info-card p {
        color: #dbeafe;
        margin: 0;
    }
    .form-card {
        padding: 2rem;
        border-radius: 1rem;
        background: rgba(255, 255, 255, 0.1);
        backdrop-filter: blur(12px);
    }
    .contact-form {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }
    .form-group label {
        display: block;
        font-size: 0.875rem;
        font-weight: 500;
        margin-bottom: 0.5rem;
    }
    .form-input {
        width: 100%;
        box-sizing: border-box;
        padding: 0.75rem 1rem;
        border-radius: 0.5rem;
        color: #fff;
        font-size: 1rem;
        background: rgba(255, 255, 255, 0.2);
        border: 1px solid rgba(255, 255, 255, 0.3);
        transition: all 0.2s;
    }
    .form-input::placeholder {
        color: #bfdbfe;
    }
    .form-input:focus {
        outline: none;
        box-shadow: 0 0 0 2px rgba(255, 255, 255, 0.5);
    }
    .form-input.has-error {
        border-color: #fca5a5;
    }
    textarea.form-input {
        resize: vertical;
    }
    .field-error {
        color: #fecaca;
        font-size: 0.875rem;
        margin: 0.5rem 0 0;
    }
    .submit-button {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        width: 100%;
        padding: 0.75rem 1.5rem;
        border: none;
        border-radius: 0.5rem;
        font-size: 1rem;
        font-weight: 600;
        color: #9333ea;
        background: #fff;
        cursor: pointer;
        transition: all 0.3s;
    }
    .submit-button:hover:not(:disabled) {
        background: #f3f4f6;
        transform: scale(1.05);
    }
    .submit-button:disabled {
        opacity: 0.7;
        cursor: wait;
    }
    .ack-panel {
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        text-align: center;
        padding: 3rem 0;
    }
    .ack-icon {
        font-size: 4rem;
        color: #4ade80;
        margin-bottom: 1rem;
        animation: bounce 1s infinite;
    }
    .ack-panel h3 {
        font-size: 1.5rem;
        font-weight: 700;
        margin-bottom: 0.5rem;
    }
    .ack-panel p {
        color: #dbeafe;
    }
    @media (max-width: 1024px) {
        .contact-inner {
            grid-template-columns: 1fr;
        }
        .contact-info h2 {
            font-size: 2.25rem;
        }
    }
"#;
