use yew::prelude::*;

use crate::sections::contact::ContactSection;

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    html! {
        <div class="page-offset">
            <ContactSection />
        </div>
    }
}
