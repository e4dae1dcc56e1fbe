use yew::prelude::*;
use yew_hooks::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Word {
    pub text: &'static str,
    pub class: &'static str,
}

impl Word {
    pub const fn new(text: &'static str, class: &'static str) -> Self {
        Self { text, class }
    }
}

pub fn total_chars(words: &[Word]) -> usize {
    words.iter().map(|w| w.text.chars().count()).sum()
}

/// Visible prefix of every word once `shown` characters have been typed.
pub fn reveal(words: &[Word], shown: usize) -> Vec<String> {
    let mut budget = shown;
    words
        .iter()
        .map(|word| {
            let visible: String = word.text.chars().take(budget).collect();
            budget = budget.saturating_sub(visible.chars().count());
            visible
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct TypewriterProps {
    pub words: Vec<Word>,
    #[prop_or(70)]
    pub cadence_ms: u32,
}

#[function_component(Typewriter)]
pub fn typewriter(props: &TypewriterProps) -> Html {
    let shown = use_state(|| 0usize);
    let total = total_chars(&props.words);
    let done = *shown >= total;

    {
        let shown = shown.clone();
        // 0 cancels the interval once everything is typed.
        use_interval(
            move || {
                if *shown < total {
                    shown.set(*shown + 1);
                }
            },
            if done { 0 } else { props.cadence_ms },
        );
    }

    let visible = reveal(&props.words, *shown);

    html! {
        <div class="typewriter">
            <style>
                {r#"
                    .typewriter {
                        display: flex;
                        align-items: center;
                        margin: 24px 0;
                        font-size: 1.25rem;
                        white-space: nowrap;
                    }
                    .typewriter-word { margin-right: 0.4ch; }
                    .typewriter-cursor {
                        display: inline-block;
                        width: 3px;
                        height: 1.4em;
                        background: #0A0A0A;
                        animation: cursorBlink 0.8s step-end infinite;
                    }
                    @keyframes cursorBlink {
                        50% { opacity: 0; }
                    }
                "#}
            </style>
            { for props.words.iter().zip(visible).filter(|(_, text)| !text.is_empty()).map(|(word, text)| html! {
                <span class={classes!("typewriter-word", word.class)}>{ text }</span>
            }) }
            <span class="typewriter-cursor"></span>
        </div>
    }
}
