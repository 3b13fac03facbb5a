use yew::prelude::*;

use crate::dom;

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    /// In-page target such as `#pricing`.
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Fired after a successful scroll, e.g. to close the mobile menu.
    #[prop_or_default]
    pub on_navigate: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// Link that scrolls smoothly to its target instead of jumping.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if dom::scroll_to_anchor(&href) {
                on_navigate.emit(());
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
