use yew::prelude::*;

use crate::components::anchor::AnchorLink;
use crate::components::before_after::BeforeAfterSlider;
use crate::components::comparison_models::{Column, Row};
use crate::components::comparison_table::{ComparisonTable, FeatureButton};
use crate::components::demo_tabs::{DemoPanel, DemoTabs};
use crate::components::reveal::Reveal;
use crate::components::scroll_top::ScrollToTop;
use crate::config;
use crate::pages::pricing::Pricing;

const FEATURES: [(&str, &str, &str); 6] = [
    ("fas fa-arrows-alt-h", "Drag-to-Compare Slider", "Patients drag a handle across the photo to see results for themselves, on desktop or touch screens."),
    ("fas fa-layer-group", "Procedure Categories", "Group cases by procedure, surgeon or body area and let visitors filter in one click."),
    ("fas fa-user-shield", "Privacy Controls", "Blur faces, hide EXIF data and watermark every image with your practice logo."),
    ("fas fa-mobile-alt", "Fully Responsive", "Galleries adapt to any screen and load fast with lazy-loaded images."),
    ("fas fa-search", "SEO Friendly", "Every case gets crawlable markup, alt text and schema so your results rank."),
    ("fas fa-plug", "Works With Any Theme", "Drop a shortcode or block anywhere. No page builder lock-in."),
];

const TESTIMONIALS: [(&str, &str, &str); 3] = [
    ("Our consult bookings went up after we put real results on the site. Patients spend minutes playing with the slider.", "Dr. Elena Ruiz", "Facial Plastic Surgeon"),
    ("Setup took ten minutes. The privacy blur alone saved our front desk hours of photo editing.", "Mark Chen", "Practice Manager, Bright Smile Dental"),
    ("We manage fifteen clinic sites on the Agency plan. One license, no headaches.", "Sara Lindqvist", "Founder, Clinic Web Studio"),
];

fn demo_panels() -> Vec<DemoPanel> {
    vec![
        DemoPanel {
            id: "demo-rhinoplasty".into(),
            label: "Rhinoplasty".into(),
            caption: "Side profile, 6 months post-op.".into(),
            before_src: "/assets/demo/rhinoplasty-before.jpg".into(),
            after_src: "/assets/demo/rhinoplasty-after.jpg".into(),
        },
        DemoPanel {
            id: "demo-dental".into(),
            label: "Dental Veneers".into(),
            caption: "Eight porcelain veneers, single visit.".into(),
            before_src: "/assets/demo/dental-before.jpg".into(),
            after_src: "/assets/demo/dental-after.jpg".into(),
        },
        DemoPanel {
            id: "demo-skin".into(),
            label: "Skin Resurfacing".into(),
            caption: "Three sessions of fractional laser.".into(),
            before_src: "/assets/demo/skin-before.jpg".into(),
            after_src: "/assets/demo/skin-after.jpg".into(),
        },
    ]
}

fn comparison_columns() -> Vec<Column> {
    vec![
        Column::new("Plugin").sortable("plugin"),
        Column::new("Starting Price").sortable("price"),
        Column::new("Drag Slider").category("slider"),
        Column::new("HIPAA-friendly").category("privacy"),
        Column::new("Categories").category("categories"),
    ]
}

fn comparison_rows() -> Vec<Row> {
    vec![
        Row::new(["MBA Gallery", "$79/yr", "Yes", "Yes", "Yes"]).feature("privacy"),
        Row::new(["Envira Gallery", "$99/yr", "Add-on", "No", "Yes"]).feature("categories"),
        Row::new(["NextGEN Gallery", "$69/yr", "No", "No", "Yes"]).feature("categories"),
        Row::new(["Twenty20 Slider", "Free", "Yes", "No", "No"]).feature("slider"),
        Row::new(["Modula", "$39/yr", "Add-on", "No", "Yes"]),
    ]
}

fn feature_buttons() -> Vec<FeatureButton> {
    vec![
        FeatureButton { feature: "slider".into(), label: "Comparison slider".into() },
        FeatureButton { feature: "privacy".into(), label: "Patient privacy".into() },
        FeatureButton { feature: "categories".into(), label: "Categories".into() },
    ]
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="landing-page">
            <section id="hero" class="hero">
                <div class="container hero-grid">
                    <Reveal class="hero-content">
                        <h1>{"Show Real Results. Win More Patients."}</h1>
                        <p class="hero-subtitle">
                            {"MBA Gallery turns your before and after photos into interactive, privacy-safe galleries for WordPress."}
                        </p>
                        <div class="hero-actions">
                            <AnchorLink href="#pricing" class="btn btn-primary">{"See Pricing"}</AnchorLink>
                            <AnchorLink href="#demo" class="btn btn-secondary">{"Try the Demo"}</AnchorLink>
                        </div>
                    </Reveal>
                    <Reveal class="hero-image">
                        <BeforeAfterSlider
                            before_src="/assets/hero-before.jpg"
                            after_src="/assets/hero-after.jpg"
                            alt="Example treatment result"
                        />
                    </Reveal>
                </div>
            </section>

            <section id="features" class="features">
                <div class="container">
                    <div class="section-header">
                        <h2>{"Everything a Results Gallery Needs"}</h2>
                        <p>{"Built with clinics, not photographers, in mind."}</p>
                    </div>
                    <div class="features-grid">
                        {
                            FEATURES.iter().enumerate().map(|(index, (icon, title, text))| html! {
                                <Reveal class="feature-card" order={index}>
                                    <i class={*icon}></i>
                                    <h3>{*title}</h3>
                                    <p>{*text}</p>
                                </Reveal>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section id="demo" class="demo">
                <div class="container">
                    <div class="section-header">
                        <h2>{"See It in Action"}</h2>
                        <p>{"Pick a procedure and drag the handle."}</p>
                    </div>
                    <DemoTabs panels={demo_panels()} />
                </div>
            </section>

            <section id="compare" class="compare">
                <div class="container">
                    <div class="section-header">
                        <h2>{"How We Compare"}</h2>
                        <p>{"Click a column header to sort, or narrow the list with the filters."}</p>
                    </div>
                    <ComparisonTable
                        id="plugin-comparison"
                        columns={comparison_columns()}
                        rows={comparison_rows()}
                        filters={vec![AttrValue::from("slider"), AttrValue::from("privacy")]}
                        feature_buttons={feature_buttons()}
                    />
                </div>
            </section>

            <Pricing />

            <section id="testimonials" class="testimonials">
                <div class="container">
                    <div class="section-header">
                        <h2>{"Trusted by Practices Worldwide"}</h2>
                    </div>
                    <div class="testimonials-grid">
                        {
                            TESTIMONIALS.iter().enumerate().map(|(index, (quote, name, role))| html! {
                                <Reveal class="testimonial" order={index}>
                                    <p class="quote">{*quote}</p>
                                    <div class="author">
                                        <strong>{*name}</strong>
                                        <span>{*role}</span>
                                    </div>
                                </Reveal>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <footer class="site-footer">
                <div class="container footer-grid">
                    <div>
                        <h3>{"MBA Gallery"}</h3>
                        <p>{"Medical before & after galleries for WordPress."}</p>
                    </div>
                    <nav class="footer-links">
                        <AnchorLink href="#features">{"Features"}</AnchorLink>
                        <AnchorLink href="#demo">{"Demo"}</AnchorLink>
                        <AnchorLink href="#pricing">{"Pricing"}</AnchorLink>
                        <a href={format!("mailto:{}", config::SUPPORT_EMAIL)}>{"Support"}</a>
                    </nav>
                </div>
            </footer>

            <ScrollToTop />
        </div>
    }
}
