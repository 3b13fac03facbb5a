use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::notification::{use_notices, NoticeKind, NoticeStack};
use crate::components::purchase_modal::{PurchaseDetails, PurchaseModal};
use crate::components::reveal::Reveal;
use crate::config;
use crate::dom;
use crate::pricing::checkout::{CheckoutHandler, PurchaseResponse};
use crate::pricing::plans::{format_price, Billing, Plan};

#[derive(Clone, Debug, Default, PartialEq)]
struct SuccessModal {
    shown: Option<(u32, PurchaseDetails)>,
}

enum ModalAction {
    Show(u32, PurchaseDetails),
    // Auto-hide only closes the modal it was started for.
    Expire(u32),
    Close,
}

impl Reducible for SuccessModal {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let shown = match action {
            ModalAction::Show(id, details) => Some((id, details)),
            ModalAction::Expire(id) => self.shown.clone().filter(|(current, _)| *current != id),
            ModalAction::Close => None,
        };
        Rc::new(SuccessModal { shown })
    }
}

#[derive(Properties, PartialEq)]
struct PlanCardProps {
    plan: Plan,
    billing: Billing,
    order: usize,
    features: Vec<&'static str>,
    #[prop_or_default]
    popular: bool,
    onclick: Callback<MouseEvent>,
}

#[function_component(PlanCard)]
fn plan_card(props: &PlanCardProps) -> Html {
    let prices = props.plan.prices();
    let annual = props.billing.is_annual();

    html! {
        <Reveal class={classes!("pricing-card", props.popular.then(|| "popular"))} order={props.order}>
            if props.popular {
                <div class="popular-tag">{"Most Popular"}</div>
            }
            <div class="card-header">
                <h3>{format!("{} Plan", props.plan.name())}</h3>
                <div class="price">
                    <span class={classes!("monthly-price", (!annual).then(|| "active"))}>
                        <span class="amount">{format_price(prices.monthly)}</span>
                        <span class="period">{"/month"}</span>
                    </span>
                    <span class={classes!("annual-price", annual.then(|| "active"))}>
                        <span class="amount">{format_price(prices.annual)}</span>
                        <span class="period">{"/year"}</span>
                    </span>
                </div>
                <span class={classes!("savings", annual.then(|| "show"))}>
                    {format!("Save {}%", prices.annual_savings_percent())}
                </span>
            </div>
            <ul>
                { for props.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
            </ul>
            <a href="#" id={props.plan.button_id()} class="btn btn-primary" onclick={props.onclick.clone()}>
                {format!("Get {}", props.plan.name())}
            </a>
        </Reveal>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let billing = use_state(Billing::default);
    let notices = use_notices();
    let modal = use_reducer(SuccessModal::default);
    let modal_ids = use_memo(|_| Cell::new(0u32), ());
    let handler = use_memo(
        |_| match CheckoutHandler::init() {
            Ok(handler) => Some(handler),
            Err(e) => {
                log::error!("{}", e);
                None
            }
        },
        (),
    );

    let on_toggle = {
        let billing = billing.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                billing.set(Billing::from_toggle(input.checked()));
            }
        })
    };

    let checkout = |plan: Plan| {
        let handler = handler.clone();
        let billing = *billing;
        let notices = notices.clone();
        let modal = modal.clone();
        let modal_ids = modal_ids.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let Some(handler) = (*handler).as_ref() else {
                log::debug!("Checkout unavailable, ignoring {} click", plan.name());
                return;
            };

            let on_completed = {
                let notices = notices.clone();
                Callback::from(move |_: PurchaseResponse| {
                    notices.show(
                        NoticeKind::Success,
                        format!("Purchase successful! Processing your {} license...", plan.name()),
                        config::PURCHASE_NOTICE_MS,
                    );
                })
            };
            let on_success = {
                let modal = modal.clone();
                let modal_ids = modal_ids.clone();
                Callback::from(move |response: PurchaseResponse| {
                    let id = modal_ids.get();
                    modal_ids.set(id.wrapping_add(1));
                    modal.dispatch(ModalAction::Show(
                        id,
                        PurchaseDetails {
                            plan: plan.name(),
                            email: response.user.email,
                            license_key: response.license.key,
                        },
                    ));
                    let modal = modal.clone();
                    Timeout::new(config::SUCCESS_MODAL_MS, move || modal.dispatch(ModalAction::Expire(id))).forget();
                })
            };

            if let Err(e) = handler.open(plan, billing, on_completed, on_success) {
                log::error!("Could not open checkout: {}", e);
            }
        })
    };

    let on_copy = {
        let notices = notices.clone();
        Callback::from(move |key: String| {
            let notices = notices.clone();
            spawn_local(async move {
                match dom::copy_to_clipboard(&key).await {
                    Ok(()) => notices.show(
                        NoticeKind::Info,
                        "License key copied to clipboard!",
                        config::COPIED_NOTICE_MS,
                    ),
                    Err(e) => log::error!("Could not copy license key: {:?}", e),
                }
            });
        })
    };

    let on_close = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.dispatch(ModalAction::Close))
    };

    html! {
        <section id="pricing" class="pricing">
            <div class="container">
                <div class="section-header">
                    <h2>{"Simple, Transparent Pricing"}</h2>
                    <p>{"Start free, upgrade when your practice needs more."}</p>
                </div>

                <div class="pricing-toggle-wrapper">
                    <span class={classes!("toggle-label", (!billing.is_annual()).then(|| "active"))}>{"Monthly"}</span>
                    <label class="switch">
                        <input type="checkbox" id="pricing-toggle" checked={billing.is_annual()} onchange={on_toggle} />
                        <span class="slider round"></span>
                    </label>
                    <span class={classes!("toggle-label", billing.is_annual().then(|| "active"))}>{"Annual"}</span>
                </div>

                <div class="pricing-grid">
                    <Reveal class="pricing-card" order={0}>
                        <div class="card-header">
                            <h3>{"Free"}</h3>
                            <div class="price">
                                <span class="amount">{"$0"}</span>
                                <span class="period">{"/forever"}</span>
                            </div>
                        </div>
                        <ul>
                            <li>{"1 before/after gallery"}</li>
                            <li>{"Drag comparison slider"}</li>
                            <li>{"Responsive layouts"}</li>
                        </ul>
                        <a href="https://wordpress.org/plugins/" class="btn btn-secondary" target="_blank" rel="noopener noreferrer">
                            {"Download Free"}
                        </a>
                    </Reveal>
                    <PlanCard
                        plan={Plan::Pro}
                        billing={*billing}
                        order={1}
                        popular=true
                        features={vec![
                            "Unlimited galleries",
                            "Procedure categories & filters",
                            "Patient consent watermarking",
                            "Priority email support",
                            "1 site license",
                        ]}
                        onclick={checkout(Plan::Pro)}
                    />
                    <PlanCard
                        plan={Plan::Agency}
                        billing={*billing}
                        order={2}
                        features={vec![
                            "Everything in Pro",
                            "White-label galleries",
                            "Client management dashboard",
                            "Dedicated support",
                            "Unlimited site licenses",
                        ]}
                        onclick={checkout(Plan::Agency)}
                    />
                </div>
            </div>

            if let Some((_, details)) = modal.shown.clone() {
                <PurchaseModal {details} {on_close} {on_copy} />
            }
            <NoticeStack items={notices.items()} />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(email: &str) -> PurchaseDetails {
        PurchaseDetails {
            plan: "Pro",
            email: email.to_string(),
            license_key: "sk_test".to_string(),
        }
    }

    #[test]
    fn expiry_of_an_older_modal_keeps_the_newer_one() {
        let state = Rc::new(SuccessModal::default())
            .reduce(ModalAction::Show(0, details("first@example.com")))
            .reduce(ModalAction::Show(1, details("second@example.com")))
            .reduce(ModalAction::Expire(0));
        assert_eq!(state.shown, Some((1, details("second@example.com"))));
    }

    #[test]
    fn expiry_hides_its_own_modal() {
        let state = Rc::new(SuccessModal::default())
            .reduce(ModalAction::Show(4, details("a@example.com")))
            .reduce(ModalAction::Expire(4));
        assert_eq!(state.shown, None);
    }

    #[test]
    fn close_hides_immediately() {
        let state = Rc::new(SuccessModal::default())
            .reduce(ModalAction::Show(0, details("a@example.com")))
            .reduce(ModalAction::Close);
        assert_eq!(state.shown, None);
    }
}
