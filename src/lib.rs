use yew::prelude::*;

pub mod components;
pub mod contact;
pub mod content;
pub mod icons;
pub mod links;
pub mod page;
pub mod theme;

use page::Page;

fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

/// Root component. Reads the clock once per page load.
#[function_component(App)]
pub fn app() -> Html {
    let year = use_memo((), |_| current_year());

    html! { <Page year={*year} /> }
}
