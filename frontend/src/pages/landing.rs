use yew::prelude::*;

use crate::components::flip_words::FlipWords;
use crate::components::notify_form::NotifyForm;
use crate::components::typewriter::{Typewriter, Word};

const TAGLINE: &[Word] = &[
    Word::new("Launching", "tagline-word"),
    Word::new("soon.", "tagline-word"),
    Word::new("Become", "tagline-word"),
    Word::new("a", "tagline-word"),
    Word::new("pioneer.", "tagline-word"),
];

const CRAFTING: &[&str] = &["comfort", "movement", "style", "hustlers"];

#[function_component(Landing)]
pub fn landing() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing">
            <style>
                {r#"
                    .landing {
                        min-height: 40rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        padding: 2rem 1rem;
                        color: #0A0A0A;
                    }
                    .landing-logo {
                        width: 120px;
                        height: 120px;
                        object-fit: contain;
                        margin-bottom: 16px;
                    }
                    .landing-brand {
                        font-size: 1.125rem;
                        font-weight: 500;
                        margin-bottom: 8px;
                    }
                    .landing-mission {
                        color: #525252;
                        font-size: 0.875rem;
                        text-align: center;
                        line-height: 1.5;
                        margin: 0;
                    }
                    .tagline-word { font-weight: 500; }
                    .landing-crafting {
                        margin-top: 16px;
                        color: #525252;
                    }
                    .crafting-word {
                        color: #0A0A0A;
                        font-weight: 500;
                    }
                    @media (max-width: 480px) {
                        .typewriter { font-size: 1rem; }
                        .notify-input { width: 260px; }
                    }
                "#}
            </style>
            <img class="landing-logo" src="/assets/logo.png" alt="Crown logo with city skyline" width="120" height="120" />
            <div class="landing-brand">{"NY Supreme Sportswear"}</div>
            <p class="landing-mission">
                {"On a mission to style the streets"}
                <br />
                {"with affordable and innovative sportswear"}
            </p>
            <Typewriter words={TAGLINE.to_vec()} />
            <div class="landing-crafting">
                {"Crafting"}
                <FlipWords words={CRAFTING.to_vec()} class="crafting-word" />
            </div>
            <NotifyForm />
        </div>
    }
}
