//! Pages driving the authentication flows, plus placeholders for the rest

use crate::auth::{AuthAction, use_auth};
use crate::routes::{Route, replace_with_path};
use jobboard_core::Role;
use jobboard_core::guard::redirect_target;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

/// Where a successful login goes without a `redirect` query
const AFTER_LOGIN: &str = "/dashboard";

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();
    let location = use_location();
    let email = use_node_ref();
    let password = use_node_ref();
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let redirect = location.and_then(|location| redirect_target(location.query_str()));

    let onsubmit = {
        let auth = auth.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let email = input_value(&email);
            let password = input_value(&password);
            let auth = auth.clone();
            let navigator = navigator.clone();
            let redirect = redirect.clone();
            let error = error.clone();
            let submitting = submitting.clone();

            submitting.set(true);
            spawn_local(async move {
                let manager = auth.manager.clone();
                let result = manager.login(&email, &password).await;
                submitting.set(false);

                match result {
                    Ok(()) => {
                        auth.dispatch(AuthAction::Sync);
                        if let Some(navigator) = navigator {
                            replace_with_path(
                                &navigator,
                                redirect.as_deref().unwrap_or(AFTER_LOGIN),
                            );
                        }
                    }
                    Err(failure) => error.set(Some(failure.to_string())),
                }
            });
        })
    };

    html! {
        <form class="auth-form" {onsubmit}>
            <h1>{"Sign in"}</h1>
            if let Some(message) = (*error).clone() {
                <p class="error">{message}</p>
            }
            <input ref={email} type="email" placeholder="Email" required=true />
            <input ref={password} type="password" placeholder="Password" required=true />
            <button type="submit" disabled={*submitting}>{"Sign in"}</button>
            <Link<Route> to={Route::Register}>{"Create an account"}</Link<Route>>
        </form>
    }
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();
    let email = use_node_ref();
    let password = use_node_ref();
    let role = use_node_ref();
    let error = use_state(|| None::<String>);

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let role = role.clone();
        let error = error.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let email = input_value(&email);
            let password = input_value(&password);
            let role = role
                .cast::<HtmlSelectElement>()
                .and_then(|select| select.value().parse::<Role>().ok())
                .unwrap_or_default();
            let manager = auth.manager.clone();
            let navigator = navigator.clone();
            let error = error.clone();

            spawn_local(async move {
                match manager.register(&email, &password, role).await {
                    Ok(_) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Login);
                        }
                    }
                    Err(failure) => error.set(Some(failure.to_string())),
                }
            });
        })
    };

    html! {
        <form class="auth-form" {onsubmit}>
            <h1>{"Create an account"}</h1>
            if let Some(message) = (*error).clone() {
                <p class="error">{message}</p>
            }
            <input ref={email} type="email" placeholder="Email" required=true />
            <input ref={password} type="password" placeholder="Password" required=true />
            <select ref={role}>
                { for Role::ALL.iter().map(|role| html! {
                    <option value={role.as_str()}>{role.to_string()}</option>
                }) }
            </select>
            <button type="submit">{"Register"}</button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct PlaceholderProps {
    pub title: AttrValue,
}

#[function_component(Placeholder)]
pub fn placeholder(props: &PlaceholderProps) -> Html {
    html! {
        <section>
            <h1>{props.title.clone()}</h1>
        </section>
    }
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let auth = use_auth();
    let greeting = auth
        .session
        .user
        .as_ref()
        .and_then(|user| user.email.clone())
        .unwrap_or_else(|| "there".to_string());
    let role = auth
        .session
        .user_role()
        .map(|role| role.to_string())
        .unwrap_or_default();

    html! {
        <section>
            <h1>{format!("Hello, {greeting}")}</h1>
            <p>{format!("Signed in as {role}")}</p>
        </section>
    }
}
