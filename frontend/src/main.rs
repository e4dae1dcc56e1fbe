use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod notify;
mod components {
    pub mod flip_words;
    pub mod notify_form;
    pub mod toaster;
    pub mod typewriter;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use components::toaster::{ToastAction, ToastList, ToastSink, Toaster};
use pages::{landing::Landing, not_found::NotFound};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    let toasts = use_reducer(ToastList::default);

    let on_toast: ToastSink = {
        let toasts = toasts.clone();
        Callback::from(move |toast| toasts.dispatch(ToastAction::Push(toast)))
    };

    let on_dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<ToastSink> context={on_toast}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
            <Toaster toasts={toasts.toasts.clone()} {on_dismiss} />
        </ContextProvider<ToastSink>>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting NY Supreme Sportswear landing page");
    yew::Renderer::<App>::new().render();
}
