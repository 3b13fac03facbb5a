use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NoticeKind {
    Success,
    Info,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Info => "info",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            NoticeKind::Success => "fas fa-check-circle",
            NoticeKind::Info => "fas fa-check",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub text: String,
}

pub enum NoticeAction {
    Show(Notice),
    Dismiss(u32),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notices {
    pub items: Vec<Notice>,
}

impl Reducible for Notices {
    type Action = NoticeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut items = self.items.clone();
        match action {
            NoticeAction::Show(notice) => items.push(notice),
            NoticeAction::Dismiss(id) => items.retain(|notice| notice.id != id),
        }
        Rc::new(Notices { items })
    }
}

/// Shows toasts that remove themselves after a timeout.
#[derive(Clone)]
pub struct NoticeHandle {
    notices: UseReducerHandle<Notices>,
    next_id: Rc<Cell<u32>>,
}

impl NoticeHandle {
    pub fn show(&self, kind: NoticeKind, text: impl Into<String>, duration_ms: u32) {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        self.notices.dispatch(NoticeAction::Show(Notice { id, kind, text: text.into() }));

        let notices = self.notices.clone();
        Timeout::new(duration_ms, move || notices.dispatch(NoticeAction::Dismiss(id))).forget();
    }

    pub fn items(&self) -> Vec<Notice> {
        self.notices.items.clone()
    }
}

#[hook]
pub fn use_notices() -> NoticeHandle {
    let notices = use_reducer(Notices::default);
    let next_id = use_memo(|_| Cell::new(0u32), ());
    NoticeHandle { notices, next_id }
}

#[derive(Properties, PartialEq)]
pub struct NoticeStackProps {
    pub items: Vec<Notice>,
}

#[function_component(NoticeStack)]
pub fn notice_stack(props: &NoticeStackProps) -> Html {
    html! {
        <div class="purchase-notifications">
            {
                props.items.iter().map(|notice| html! {
                    <div key={notice.id} class={classes!("purchase-notification", notice.kind.class())}>
                        <i class={notice.kind.icon()}></i>
                        <span>{notice.text.clone()}</span>
                    </div>
                }).collect::<Html>()
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice(id: u32, text: &str) -> Notice {
        Notice { id, kind: NoticeKind::Success, text: text.to_string() }
    }

    #[test]
    fn show_appends_in_order() {
        let state = Rc::new(Notices::default());
        let state = state.reduce(NoticeAction::Show(notice(0, "first")));
        let state = state.reduce(NoticeAction::Show(notice(1, "second")));
        let texts: Vec<_> = state.items.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, ["first", "second"]);
    }

    #[test]
    fn dismiss_only_removes_matching_id() {
        let state = Rc::new(Notices::default())
            .reduce(NoticeAction::Show(notice(0, "first")))
            .reduce(NoticeAction::Show(notice(1, "second")))
            .reduce(NoticeAction::Dismiss(0));
        assert_eq!(state.items, vec![notice(1, "second")]);
    }

    #[test]
    fn dismissing_twice_is_harmless() {
        let state = Rc::new(Notices::default())
            .reduce(NoticeAction::Show(notice(3, "only")))
            .reduce(NoticeAction::Dismiss(3))
            .reduce(NoticeAction::Dismiss(3));
        assert!(state.items.is_empty());
    }
}
