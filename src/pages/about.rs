use yew::prelude::*;

use crate::sections::about::AboutSection;

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <div class="page-offset">
            <AboutSection />
        </div>
    }
}
