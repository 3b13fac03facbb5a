use yew::prelude::*;

use crate::config;

#[derive(Clone, Debug, PartialEq)]
pub struct PurchaseDetails {
    pub plan: &'static str,
    pub email: String,
    pub license_key: String,
}

#[derive(Properties, PartialEq)]
pub struct PurchaseModalProps {
    pub details: PurchaseDetails,
    pub on_close: Callback<()>,
    /// Receives the license key to put on the clipboard.
    pub on_copy: Callback<String>,
}

#[function_component(PurchaseModal)]
pub fn purchase_modal(props: &PurchaseModalProps) -> Html {
    let details = &props.details;

    let copy = {
        let on_copy = props.on_copy.clone();
        let key = details.license_key.clone();
        Callback::from(move |_: MouseEvent| on_copy.emit(key.clone()))
    };
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="purchase-success-modal" style="display: flex;">
            <div class="modal-content">
                <div class="modal-header">
                    <i class="fas fa-check-circle"></i>
                    <h2>{"Purchase Successful!"}</h2>
                </div>
                <div class="modal-body">
                    <p>
                        {"Thank you for purchasing "}
                        <strong>{format!("MBA Gallery {}", details.plan)}</strong>
                        {"!"}
                    </p>
                    <div class="purchase-details">
                        <div class="detail-item">
                            <strong>{"Email:"}</strong>{" "}{details.email.clone()}
                        </div>
                        <div class="detail-item">
                            <strong>{"License Key:"}</strong>
                            <code>{details.license_key.clone()}</code>
                            <button class="copy-btn" onclick={copy} aria-label="Copy license key">
                                <i class="fas fa-copy"></i>
                            </button>
                        </div>
                    </div>
                    <div class="next-steps">
                        <h3>{"Next Steps:"}</h3>
                        <ol>
                            <li>{"Check your email for download instructions"}</li>
                            <li>{"Download the plugin from your account"}</li>
                            <li>{"Install and activate using your license key"}</li>
                        </ol>
                    </div>
                </div>
                <div class="modal-footer">
                    <button class="btn btn-primary" onclick={close}>
                        {"Got it, thanks!"}
                    </button>
                    <a href={format!("mailto:{}", config::SUPPORT_EMAIL)} class="btn btn-secondary">
                        {"Need Help?"}
                    </a>
                </div>
            </div>
        </div>
    }
}
