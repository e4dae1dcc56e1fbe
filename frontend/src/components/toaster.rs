use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

impl Toast {
    pub fn success(title: &str, description: Option<&str>) -> Self {
        Self {
            id: 0,
            kind: ToastKind::Success,
            title: title.to_string(),
            description: description.map(str::to_string),
        }
    }

    pub fn error(title: &str) -> Self {
        Self {
            id: 0,
            kind: ToastKind::Error,
            title: title.to_string(),
            description: None,
        }
    }
}

/// Handed down through context so any component can raise a toast.
pub type ToastSink = Callback<Toast>;

pub enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastList {
    next_id: u32,
    pub toasts: Vec<Toast>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(mut toast) => {
                next.next_id = next.next_id.wrapping_add(1);
                toast.id = next.next_id;
                next.toasts.push(toast);
            }
            ToastAction::Dismiss(id) => next.toasts.retain(|t| t.id != id),
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    html! {
        <div class="toaster">
            <style>
                {r#"
                    .toaster {
                        position: fixed;
                        bottom: 24px;
                        right: 24px;
                        display: flex;
                        flex-direction: column;
                        gap: 8px;
                        z-index: 100;
                    }
                    .toast {
                        min-width: 280px;
                        max-width: 360px;
                        padding: 14px 16px;
                        border-radius: 10px;
                        background: #fff;
                        border: 1px solid #e5e5e5;
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
                        font-size: 13px;
                        color: #0A0A0A;
                        cursor: pointer;
                        animation: toastIn 0.25s ease-out;
                    }
                    .toast.error { color: #b91c1c; }
                    .toast-description {
                        margin-top: 4px;
                        color: #525252;
                    }
                    @keyframes toastIn {
                        from { transform: translateY(12px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                "#}
            </style>
            { for props.toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={props.on_dismiss.clone()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.toast.id;

    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(move |_| {
            let timeout = Timeout::new(DISMISS_AFTER_MS, move || on_dismiss.emit(id));
            move || drop(timeout)
        }, id);
    }

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let class = match props.toast.kind {
        ToastKind::Success => "toast success",
        ToastKind::Error => "toast error",
    };

    html! {
        <div {class} role="status" {onclick}>
            <div class="toast-title">{ &props.toast.title }</div>
            if let Some(description) = &props.toast.description {
                <div class="toast-description">{ description }</div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pushes_get_distinct_ids_and_dismiss_removes_one() {
        let list = Rc::new(ToastList::default());
        let list = list.reduce(ToastAction::Push(Toast::error("first")));
        let list = list.reduce(ToastAction::Push(Toast::success("second", None)));

        let ids: Vec<u32> = list.toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);

        let list = list.reduce(ToastAction::Dismiss(1));
        assert_eq!(list.toasts.len(), 1);
        assert_eq!(list.toasts[0].title, "second");
    }
}
