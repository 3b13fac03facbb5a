use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod dom;
mod styles;
mod components {
    pub mod anchor;
    pub mod before_after;
    pub mod comparison_models;
    pub mod comparison_table;
    pub mod demo_tabs;
    pub mod notification;
    pub mod purchase_modal;
    pub mod reveal;
    pub mod scroll_top;
    pub mod slider_state;
}
mod pricing {
    pub mod checkout;
    pub mod plans;
}
mod pages {
    pub mod home;
    pub mod not_found;
    pub mod pricing;
}

use components::anchor::AnchorLink;
use pages::{home::Home, not_found::NotFound};
use styles::SiteStyles;


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
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


const NAV_LINKS: [(&str, &str); 5] = [
    ("#features", "Features"),
    ("#demo", "Demo"),
    ("#compare", "Compare"),
    ("#pricing", "Pricing"),
    ("#testimonials", "Reviews"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_sticky = use_state(|| dom::is_sticky(dom::scroll_y()));

    {
        let is_sticky = is_sticky.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = Closure::wrap(Box::new(move || {
                is_sticky.set(dom::is_sticky(dom::scroll_y()));
            }) as Box<dyn FnMut()>);

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    html! {
        <header class={classes!("site-header", (*is_sticky).then(|| "sticky"))}>
            <div class="container header-content">
                <Link<Route> to={Route::Home} classes="logo">
                    {"MBA Gallery"}
                </Link<Route>>

                <nav class={classes!("main-nav", (*menu_open).then(|| "active"))}>
                    <ul>
                        {
                            NAV_LINKS.iter().map(|(href, label)| html! {
                                <li>
                                    <AnchorLink href={*href} on_navigate={close_menu.clone()}>
                                        {*label}
                                    </AnchorLink>
                                </li>
                            }).collect::<Html>()
                        }
                    </ul>
                </nav>

                <button
                    class={classes!("mobile-menu-toggle", (*menu_open).then(|| "active"))}
                    aria-label="Toggle navigation"
                    aria-expanded={menu_open.to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </header>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <SiteStyles />
            <Nav />
            <main>
                <Switch<Route> render={switch} />
            </main>
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
