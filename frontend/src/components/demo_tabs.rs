use yew::prelude::*;

use crate::components::before_after::BeforeAfterSlider;

#[derive(Clone, PartialEq)]
pub struct DemoPanel {
    pub id: AttrValue,
    pub label: AttrValue,
    pub caption: AttrValue,
    pub before_src: AttrValue,
    pub after_src: AttrValue,
}

/// Which demo panel is showing, and how many times each panel has been activated.
#[derive(Clone, Debug, PartialEq)]
pub struct TabSet {
    ids: Vec<String>,
    active: Option<usize>,
    activations: Vec<u32>,
}

impl TabSet {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        let activations = vec![0; ids.len()];
        let active = if ids.is_empty() { None } else { Some(0) };
        Self { ids, active, activations }
    }

    /// Switches to the panel called `id`. An unknown id leaves no panel
    /// showing. Returns whether a panel was activated.
    pub fn activate(&mut self, id: &str) -> bool {
        self.active = self.ids.iter().position(|candidate| candidate == id);
        match self.active {
            Some(index) => {
                self.activations[index] = self.activations[index].wrapping_add(1);
                true
            }
            None => false,
        }
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active
            .map(|index| self.ids[index] == id)
            .unwrap_or(false)
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.map(|index| self.ids[index].as_str())
    }

    /// Reset token for the slider inside panel `id`.
    pub fn activations(&self, id: &str) -> u32 {
        self.ids
            .iter()
            .position(|candidate| candidate == id)
            .map(|index| self.activations[index])
            .unwrap_or(0)
    }
}

#[derive(Properties, PartialEq)]
pub struct DemoTabsProps {
    pub panels: Vec<DemoPanel>,
}

#[function_component(DemoTabs)]
pub fn demo_tabs(props: &DemoTabsProps) -> Html {
    let tabs = {
        let ids: Vec<String> = props.panels.iter().map(|p| p.id.to_string()).collect();
        use_state(move || TabSet::new(ids))
    };

    let select = {
        let tabs = tabs.clone();
        Callback::from(move |id: AttrValue| {
            let mut next = (*tabs).clone();
            if !next.activate(&id) {
                log::debug!("Demo tab points at unknown panel {}", id);
            }
            tabs.set(next);
        })
    };

    html! {
        <div class="demo-tabs-container">
            <div class="demo-tabs" role="tablist">
                {
                    props.panels.iter().map(|panel| {
                        let onclick = {
                            let select = select.clone();
                            let id = panel.id.clone();
                            Callback::from(move |_: MouseEvent| select.emit(id.clone()))
                        };
                        let active = tabs.is_active(&panel.id);
                        html! {
                            <button
                                class={classes!("demo-tab", active.then(|| "active"))}
                                role="tab"
                                aria-selected={active.to_string()}
                                data-tab={panel.id.clone()}
                                {onclick}
                            >
                                {panel.label.clone()}
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>
            <div class="demo-panels">
                {
                    props.panels.iter().map(|panel| {
                        let active = tabs.is_active(&panel.id);
                        html! {
                            <div
                                id={panel.id.clone()}
                                class={classes!("demo-panel", active.then(|| "active"))}
                                role="tabpanel"
                            >
                                <BeforeAfterSlider
                                    before_src={panel.before_src.clone()}
                                    after_src={panel.after_src.clone()}
                                    alt={panel.label.clone()}
                                    reset={tabs.activations(&panel.id)}
                                />
                                <p class="demo-caption">{panel.caption.clone()}</p>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
            <style>
                {r#"
                    .demo-tabs {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 0.5rem;
                        margin-bottom: 1.5rem;
                    }
                    .demo-tab {
                        padding: 0.6rem 1.2rem;
                        border: 1px solid var(--border-color, #e5e7eb);
                        border-radius: 999px;
                        background: transparent;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .demo-tab.active {
                        background: var(--primary-color, #3c88fd);
                        border-color: var(--primary-color, #3c88fd);
                        color: #fff;
                    }
                    .demo-panel { display: none; }
                    .demo-panel.active { display: block; }
                    .demo-caption {
                        text-align: center;
                        margin-top: 1rem;
                        color: #6b7280;
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs() -> TabSet {
        TabSet::new(["rhinoplasty", "dental", "skin"])
    }

    #[test]
    fn first_panel_starts_active() {
        let tabs = tabs();
        assert_eq!(tabs.active_id(), Some("rhinoplasty"));
        assert!(!tabs.is_active("dental"));
    }

    #[test]
    fn activating_switches_exactly_one_panel() {
        let mut tabs = tabs();
        assert!(tabs.activate("skin"));
        assert!(tabs.is_active("skin"));
        assert!(!tabs.is_active("rhinoplasty"));
        assert!(!tabs.is_active("dental"));
    }

    #[test]
    fn unknown_panel_hides_everything() {
        let mut tabs = tabs();
        assert!(!tabs.activate("missing"));
        assert_eq!(tabs.active_id(), None);
        assert!(!tabs.is_active("rhinoplasty"));
    }

    #[test]
    fn each_activation_bumps_that_panels_reset_token() {
        let mut tabs = tabs();
        tabs.activate("dental");
        tabs.activate("dental");
        tabs.activate("skin");
        assert_eq!(tabs.activations("dental"), 2);
        assert_eq!(tabs.activations("skin"), 1);
        assert_eq!(tabs.activations("rhinoplasty"), 0);
    }

    #[test]
    fn empty_set_has_nothing_active() {
        let tabs = TabSet::new(Vec::<String>::new());
        assert_eq!(tabs.active_id(), None);
        assert_eq!(tabs.activations("anything"), 0);
    }
}
