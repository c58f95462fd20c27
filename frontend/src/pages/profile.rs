use log::{debug, error};
use shared::{SharedError, UpdateProfileRequest, UserProfile};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::users::{deactivate_account, get_profile, update_profile};
use crate::auth::AuthContext;
use crate::components::toast::{Toast, ToastContext, ToastType};
use crate::Route;

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let toasts = use_context::<ToastContext>().expect("Toast context not found");
    let navigator = use_navigator().unwrap();

    let profile = use_state(|| None::<UserProfile>);
    let full_name = use_state(String::new);
    let email = use_state(String::new);
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);
    let confirm_delete = use_state(|| false);

    let user_id = auth
        .state
        .user
        .as_ref()
        .map(|u| u.user_id.clone())
        .unwrap_or_default();

    // Shared failure handling: 401 logs out, everything else lands in the alert
    let fail = {
        let error = error.clone();
        let expire = auth.expire.clone();
        Callback::from(move |e: SharedError| {
            error!("Profile request failed: {}", e);
            if e.is_unauthorized() {
                expire.emit(());
            } else {
                error.set(Some(e.user_message()));
            }
        })
    };

    {
        let profile = profile.clone();
        let full_name = full_name.clone();
        let email = email.clone();
        let fail = fail.clone();
        use_effect_with(user_id.clone(), move |user_id| {
            let user_id = user_id.clone();
            spawn_local(async move {
                match get_profile(&user_id).await {
                    Ok(p) => {
                        full_name.set(p.full_name.clone());
                        email.set(p.email.clone());
                        profile.set(Some(p));
                    }
                    Err(e) => fail.emit(e),
                }
            });
            || ()
        });
    }

    let on_name = {
        let full_name = full_name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            full_name.set(input.value());
        })
    };

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_save = {
        let profile = profile.clone();
        let full_name = full_name.clone();
        let email = email.clone();
        let error = error.clone();
        let saving = saving.clone();
        let fail = fail.clone();
        let add_toast = toasts.add_toast.clone();
        let user_id = user_id.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(current) = (*profile).clone() else {
                return;
            };
            let update = UpdateProfileRequest::changes_from(&current, &full_name, &email);
            let profile = profile.clone();
            let error = error.clone();
            let saving = saving.clone();
            let fail = fail.clone();
            let add_toast = add_toast.clone();
            let user_id = user_id.clone();
            error.set(None);
            saving.set(true);
            spawn_local(async move {
                match update_profile(&user_id, &update).await {
                    Ok(response) => {
                        debug!("Profile updated: {}", response.message);
                        profile.set(Some(UserProfile {
                            full_name: update.full_name.unwrap_or(current.full_name.clone()),
                            email: update.email.unwrap_or(current.email.clone()),
                            ..current
                        }));
                        add_toast.emit(Toast::new("Profile updated", ToastType::Success));
                    }
                    Err(e) => fail.emit(e),
                }
                saving.set(false);
            });
        })
    };

    let on_deactivate = {
        let confirm_delete = confirm_delete.clone();
        let fail = fail.clone();
        let logout = auth.logout.clone();
        let add_toast = toasts.add_toast.clone();
        let navigator = navigator.clone();
        let user_id = user_id.clone();
        Callback::from(move |_: MouseEvent| {
            if !*confirm_delete {
                confirm_delete.set(true);
                return;
            }
            let fail = fail.clone();
            let logout = logout.clone();
            let add_toast = add_toast.clone();
            let navigator = navigator.clone();
            let user_id = user_id.clone();
            spawn_local(async move {
                match deactivate_account(&user_id).await {
                    Ok(response) => {
                        add_toast.emit(Toast::new(response.message, ToastType::Info).with_duration(8000));
                        logout.emit(());
                        navigator.push(&Route::Login);
                    }
                    Err(e) => fail.emit(e),
                }
            });
        })
    };

    html! {
        <div class="container py-4 profile-page">
            <div class="card bg-dark text-light border-secondary">
                <div class="card-header border-secondary fw-semibold">{"Your Account"}</div>
                <div class="card-body">
                    if let Some(msg) = &*error {
                        <div class="alert alert-danger py-2">{msg.clone()}</div>
                    }
                    if let Some(p) = &*profile {
                        <dl class="row mb-4">
                            <dt class="col-sm-3">{"Username"}</dt>
                            <dd class="col-sm-9">{p.username.clone()}</dd>
                            <dt class="col-sm-3">{"Role"}</dt>
                            <dd class="col-sm-9">{p.role.clone()}</dd>
                            <dt class="col-sm-3">{"Member since"}</dt>
                            <dd class="col-sm-9">{p.member_since().unwrap_or_else(|| "Unknown".to_string())}</dd>
                        </dl>
                        <form onsubmit={on_save}>
                            <div class="mb-3">
                                <label for="profileName" class="form-label">{"Full name"}</label>
                                <input id="profileName" class="form-control" value={(*full_name).clone()} oninput={on_name} />
                            </div>
                            <div class="mb-3">
                                <label for="profileEmail" class="form-label">{"Email"}</label>
                                <input id="profileEmail" type="email" class="form-control" value={(*email).clone()} oninput={on_email} />
                            </div>
                            <button type="submit" class="btn btn-primary" disabled={*saving}>
                                { if *saving { "Saving..." } else { "Save changes" } }
                            </button>
                        </form>
                        <hr class="border-secondary" />
                        <button class="btn btn-outline-danger" onclick={on_deactivate}>
                            { if *confirm_delete { "Click again to confirm deactivation" } else { "Deactivate account" } }
                        </button>
                    } else if error.is_none() {
                        <p class="text-muted">{"Loading profile..."}</p>
                    }
                </div>
            </div>
        </div>
    }
}
