use crate::auth::{AuthAction, AuthProvider, Guarded, SessionHandle, use_auth};
use crate::hooks::use_unread_count;
use crate::pages::{Dashboard, LoginPage, Placeholder, RegisterPage};
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub manager: SessionHandle,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <AuthProvider manager={props.manager.clone()}>
            <BrowserRouter>
                <Nav />
                <main>
                    <Switch<Route> render={switch} />
                </main>
            </BrowserRouter>
        </AuthProvider>
    }
}

fn switch(route: Route) -> Html {
    let page = match &route {
        Route::Home => html! { <Placeholder title="Find your next job" /> },
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::Jobs => html! { <Placeholder title="Jobs" /> },
        Route::JobDetails { id } => html! { <Placeholder title={format!("Job #{id}")} /> },
        Route::Dashboard => html! { <Dashboard /> },
        Route::AiAssistant => html! { <Placeholder title="AI assistant" /> },
        Route::Profile => html! { <Placeholder title="Profile" /> },
        Route::PostJob => html! { <Placeholder title="Post a job" /> },
        Route::SavedJobs => html! { <Placeholder title="Saved jobs" /> },
        Route::Interviews => html! { <Placeholder title="Interviews" /> },
        Route::NotFound => html! { <Placeholder title="Page not found" /> },
    };

    html! {
        <Guarded {route}>{page}</Guarded>
    }
}

#[function_component(Nav)]
fn nav() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();
    let unread = use_unread_count();

    let on_logout = {
        let auth = auth.clone();
        Callback::from(move |_| {
            auth.dispatch(AuthAction::Logout);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };

    let session = &auth.session;
    html! {
        <nav>
            <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
            <Link<Route> to={Route::Jobs}>{"Jobs"}</Link<Route>>
            if session.is_authenticated() {
                <Link<Route> to={Route::Dashboard}>{"Dashboard"}</Link<Route>>
                if session.is_recruiter() {
                    <Link<Route> to={Route::PostJob}>{"Post a job"}</Link<Route>>
                }
                if session.is_candidate() {
                    <Link<Route> to={Route::SavedJobs}>{"Saved jobs"}</Link<Route>>
                }
                <span class="badge">{unread}</span>
                <button onclick={on_logout}>{"Log out"}</button>
            } else {
                <Link<Route> to={Route::Login}>{"Sign in"}</Link<Route>>
                <Link<Route> to={Route::Register}>{"Register"}</Link<Route>>
            }
        </nav>
    }
}
