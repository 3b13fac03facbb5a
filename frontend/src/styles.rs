//! Global style sheets the interactive sections depend on.

use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

#[function_component(SiteStyles)]
pub fn site_styles() -> Html {
    html! {
        <>
            <Global css={css!(r#"
                .will-animate {
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }

                .animate {
                    opacity: 1;
                    transform: translateY(0);
                }

                .feature-card.will-animate,
                .pricing-card.will-animate,
                .testimonial.will-animate {
                    transition-delay: calc(var(--animation-order) * 0.1s);
                }
            "#)} />

            <Global css={css!(r#"
                .site-header.sticky {
                    background: rgba(255, 255, 255, 0.98);
                    box-shadow: 0 4px 10px rgba(0, 0, 0, 0.1);
                    padding: 0.75rem 0;
                    backdrop-filter: blur(10px);
                    transition: all 0.3s ease;
                }

                @media (max-width: 768px) {
                    .main-nav {
                        position: absolute;
                        top: 100%;
                        left: 0;
                        width: 100%;
                        background: var(--bg-color);
                        box-shadow: var(--shadow);
                        padding: 1rem;
                        transform: translateY(-100%);
                        opacity: 0;
                        visibility: hidden;
                        transition: all 0.3s ease;
                    }

                    .main-nav.active {
                        transform: translateY(0);
                        opacity: 1;
                        visibility: visible;
                    }

                    .main-nav ul {
                        flex-direction: column;
                        align-items: center;
                        gap: 1rem;
                    }

                    .mobile-menu-toggle.active span:nth-child(1) {
                        transform: rotate(45deg) translate(5px, 5px);
                    }

                    .mobile-menu-toggle.active span:nth-child(2) {
                        opacity: 0;
                    }

                    .mobile-menu-toggle.active span:nth-child(3) {
                        transform: rotate(-45deg) translate(7px, -6px);
                    }

                    .site-header.sticky {
                        padding: 0.5rem 0;
                    }
                }
            "#)} />

            <Global css={css!(r#"
                .comparison-table table {
                    transition: all 0.3s ease;
                }

                .comparison-table th.sorting-asc::after {
                    content: "\2191";
                    margin-left: 5px;
                }

                .comparison-table th.sorting-desc::after {
                    content: "\2193";
                    margin-left: 5px;
                }

                .comparison-table th[data-sort] {
                    cursor: pointer;
                }

                .comparison-table th[data-sort]:hover {
                    background: rgba(31, 41, 55, 0.8);
                }

                .comparison-table tr.highlighted {
                    background-color: rgba(60, 136, 253, 0.1) !important;
                    font-weight: 500;
                }

                .comparison-filter {
                    margin-bottom: 1rem;
                }

                .comparison-filter select {
                    padding: 0.5rem;
                    border-radius: var(--border-radius);
                    border: 1px solid var(--border-color);
                    font-family: 'Poppins', sans-serif;
                    margin-right: 0.5rem;
                }

                .comparison-feature-buttons {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin-bottom: 1rem;
                }

                .comparison-highlight-btn {
                    padding: 0.5rem 1rem;
                    border-radius: var(--border-radius);
                    border: 1px solid var(--border-color);
                    background: var(--bg-color);
                    cursor: pointer;
                    transition: all 0.3s ease;
                    font-family: 'Poppins', sans-serif;
                }

                .comparison-highlight-btn.active {
                    background: var(--primary-color);
                    color: white;
                    border-color: var(--primary-color);
                }

                @media (max-width: 768px) {
                    .comparison-feature-buttons {
                        justify-content: center;
                    }
                }
            "#)} />

            <Global css={css!(r#"
                .purchase-notifications {
                    position: fixed;
                    top: 1.5rem;
                    right: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    z-index: 1100;
                }

                .purchase-notification {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.75rem 1.25rem;
                    border-radius: var(--border-radius);
                    color: white;
                    box-shadow: 0 4px 10px rgba(0, 0, 0, 0.15);
                }

                .purchase-notification.success {
                    background: #16a34a;
                }

                .purchase-notification.info {
                    background: var(--primary-color);
                }

                .purchase-success-modal {
                    position: fixed;
                    inset: 0;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.5);
                    z-index: 1000;
                }

                .purchase-success-modal .modal-content {
                    max-width: 520px;
                    width: 90%;
                    padding: 2rem;
                    border-radius: var(--border-radius);
                    background: var(--bg-color);
                }

                .purchase-success-modal .modal-header i {
                    color: #16a34a;
                    font-size: 2.5rem;
                }

                .purchase-success-modal .modal-footer {
                    display: flex;
                    gap: 0.75rem;
                    justify-content: flex-end;
                    margin-top: 1.5rem;
                }

                .purchase-success-modal code {
                    padding: 0.2rem 0.4rem;
                    border-radius: 4px;
                    background: rgba(31, 41, 55, 0.08);
                }

                .copy-btn {
                    margin-left: 0.5rem;
                    border: none;
                    background: none;
                    cursor: pointer;
                }
            "#)} />
        </>
    }
}
