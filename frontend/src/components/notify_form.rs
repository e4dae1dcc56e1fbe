use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::toaster::ToastSink;
use crate::config::GateConfig;
use crate::notify::{BrowserGate, FormState};

#[function_component(NotifyForm)]
pub fn notify_form() -> Html {
    let gate = use_memo(|_| BrowserGate::from_browser(GateConfig::default()), ());
    let form = use_state(FormState::default);
    let on_toast = use_context::<ToastSink>().unwrap_or_else(Callback::noop);

    let on_email_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(form.with_email(input.value()));
        })
    };

    let on_honeypot_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(form.with_honeypot(input.value()));
        })
    };

    let submit = {
        let gate = gate.clone();
        let form = form.clone();
        Callback::from(move |_: ()| {
            let sending = match form.start() {
                Some(sending) => sending,
                None => return,
            };
            form.set(sending.clone());

            let gate = gate.clone();
            let form = form.clone();
            let on_toast = on_toast.clone();
            spawn_local(async move {
                let result = gate.submit(&sending.email, &sending.honeypot).await;
                let (settled, toast) = sending.settle(&result);
                form.set(settled);
                on_toast.emit(toast);
            });
        })
    };

    let onclick = submit.reform(|_: MouseEvent| ());
    let onkeydown = {
        let submit = submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                submit.emit(());
            }
        })
    };

    html! {
        <div class="notify-form">
            <style>
                {r#"
                    .notify-form {
                        margin-top: 24px;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 12px;
                    }
                    .notify-input {
                        width: 320px;
                        height: 48px;
                        padding: 0 16px;
                        border-radius: 12px;
                        border: 1px solid #d4d4d4;
                        background: #fff;
                        color: #171717;
                        font-size: 14px;
                        font-family: inherit;
                        outline: none;
                    }
                    .notify-button {
                        height: 32px;
                        padding: 0 24px;
                        background: #0A0A0A;
                        color: #fff;
                        border: none;
                        border-radius: 12px;
                        font-weight: 500;
                        font-family: inherit;
                        cursor: pointer;
                        transition: background 0.2s;
                    }
                    .notify-button:hover { background: #525252; }
                    .notify-input:disabled,
                    .notify-button:disabled {
                        opacity: 0.5;
                        cursor: not-allowed;
                    }
                "#}
            </style>
            // honeypot: hidden and out of the tab order, only bots fill it
            <input
                type="text"
                name="website"
                value={form.honeypot.clone()}
                oninput={on_honeypot_input}
                style="display: none;"
                tabindex="-1"
                autocomplete="off"
            />
            <input
                class="notify-input"
                type="email"
                placeholder="legend@email.com"
                value={form.email.clone()}
                oninput={on_email_input}
                {onkeydown}
                disabled={form.submitting}
            />
            <button class="notify-button" {onclick} disabled={form.submitting}>
                { if form.submitting { "Submitting..." } else { "Notify me" } }
            </button>
        </div>
    }
}
