use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div style="min-height: 60vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 12px;">
            <h1 style="font-size: 1.5rem; font-weight: 500;">{"Nothing here yet"}</h1>
            <Link<Route> to={Route::Home}>
                {"Back to NY Supreme Sportswear"}
            </Link<Route>>
        </div>
    }
}
