use yew::prelude::*;
use yew_hooks::prelude::*;

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

#[derive(Properties, PartialEq)]
pub struct FlipWordsProps {
    pub words: Vec<&'static str>,
    #[prop_or(3_000)]
    pub every_ms: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(FlipWords)]
pub fn flip_words(props: &FlipWordsProps) -> Html {
    let index = use_state(|| 0usize);

    {
        let index = index.clone();
        let len = props.words.len();
        use_interval(move || index.set(next_index(*index, len)), if len > 1 { props.every_ms } else { 0 });
    }

    let word = match props.words.get(*index) {
        Some(word) => *word,
        None => return html! {},
    };

    html! {
        <>
            <style>
                {r#"
                    .flip-word {
                        display: inline-block;
                        margin-left: 0.5ch;
                        animation: flipIn 0.5s ease-out;
                    }
                    @keyframes flipIn {
                        from { transform: translateY(8px); opacity: 0; filter: blur(4px); }
                        to { transform: translateY(0); opacity: 1; filter: blur(0); }
                    }
                "#}
            </style>
            <span class="flip-words">
                // new key per flip remounts the span and replays flipIn
                <span key={*index} class={classes!("flip-word", props.class.clone())}>{ word }</span>
            </span>
        </>
    }
}
