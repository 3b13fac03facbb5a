use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::dom;

#[function_component(ScrollToTop)]
pub fn scroll_to_top() -> Html {
    let visible = use_state(|| dom::shows_scroll_top(dom::scroll_y()));

    {
        let visible = visible.clone();
        use_event_with_window("scroll", move |_: Event| {
            visible.set(dom::shows_scroll_top(dom::scroll_y()));
        });
    }

    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        dom::smooth_scroll_to(0.0);
    });

    html! {
        <a
            href="#"
            id="scroll-top"
            class={classes!("scroll-top", (*visible).then(|| "visible"))}
            aria-label="Back to top"
            {onclick}
        >
            <i class="fas fa-arrow-up"></i>
            <style>
                {r#"
                    .scroll-top {
                        position: fixed;
                        right: 1.5rem;
                        bottom: 1.5rem;
                        width: 44px;
                        height: 44px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 50%;
                        background: var(--primary-color, #3c88fd);
                        color: #fff;
                        opacity: 0;
                        visibility: hidden;
                        transition: all 0.3s ease;
                        z-index: 90;
                    }
                    .scroll-top.visible {
                        opacity: 1;
                        visibility: visible;
                    }
                "#}
            </style>
        </a>
    }
}
