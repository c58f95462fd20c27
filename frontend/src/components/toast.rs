use gloo_timers::callback::Timeout;
use std::rc::Rc;
use uuid::Uuid;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum ToastType {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastType {
    fn classes(&self) -> &'static str {
        match self {
            ToastType::Success => "text-bg-success",
            ToastType::Error => "text-bg-danger",
            ToastType::Warning => "text-bg-warning",
            ToastType::Info => "text-bg-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub toast_type: ToastType,
    pub duration: Option<u32>, // milliseconds, None for manual dismiss
}

impl Toast {
    pub fn new(message: impl Into<String>, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            toast_type,
            duration: Some(5000),
        }
    }

    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = Some(duration);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastContext {
    pub toasts: Vec<Toast>,
    pub add_toast: Callback<Toast>,
    pub remove_toast: Callback<Uuid>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[derive(Clone, Debug, Default, PartialEq)]
struct ToastQueue {
    toasts: Vec<Toast>,
}

enum ToastAction {
    Add(Toast),
    Remove(Uuid),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Add(toast) => toasts.push(toast),
            ToastAction::Remove(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(Self { toasts })
    }
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);

    let add_toast = {
        let queue = queue.clone();
        Callback::from(move |toast: Toast| {
            let toast_id = toast.id;
            let duration = toast.duration;
            queue.dispatch(ToastAction::Add(toast));

            // Auto-remove after duration if specified
            if let Some(duration_ms) = duration {
                let queue = queue.clone();
                Timeout::new(duration_ms, move || queue.dispatch(ToastAction::Remove(toast_id))).forget();
            }
        })
    };

    let remove_toast = {
        let queue = queue.clone();
        Callback::from(move |id: Uuid| queue.dispatch(ToastAction::Remove(id)))
    };

    let context = ToastContext {
        toasts: queue.toasts.clone(),
        add_toast,
        remove_toast,
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <ToastList />
        </ContextProvider<ToastContext>>
    }
}

#[function_component(ToastList)]
fn toast_list() -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    html! {
        <div class="toast-container position-fixed top-0 end-0 p-3">
            {toast_context.toasts.iter().map(|toast| {
                let on_close = {
                    let remove = toast_context.remove_toast.clone();
                    let id = toast.id;
                    Callback::from(move |_: MouseEvent| remove.emit(id))
                };
                html! {
                    <div key={toast.id.to_string()} class={classes!("toast", "show", "border-0", toast.toast_type.classes())} role="alert">
                        <div class="d-flex">
                            <div class="toast-body">{&toast.message}</div>
                            <button type="button" class="btn-close btn-close-white me-2 m-auto" onclick={on_close}></button>
                        </div>
                    </div>
                }
            }).collect::<Html>()}
        </div>
    }
}
