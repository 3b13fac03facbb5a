use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="not-found">
            <div class="container">
                <h1>{"Page not found"}</h1>
                <p>{"The page you were looking for doesn't exist."}</p>
                <Link<Route> to={Route::Home} classes="btn btn-primary">
                    {"Back to the gallery"}
                </Link<Route>>
            </div>
        </section>
    }
}
