mod api;
mod components;
mod env_variable_utils;
mod models;
mod router;
mod utils;

use crate::env_variable_utils::{get_app_name, BACKEND_URL};
use crate::router::{switch, Route};
use web_sys::console;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();

    console::log_1(&format!("NAME: \"{}\", API: \"{}\"", get_app_name(), &*BACKEND_URL).into());
}
