use yew::prelude::*;

use crate::sections::app::AppSection;
use crate::sections::services::ServicesSection;
use crate::sections::software::SoftwareSection;
use crate::sections::website::WebsiteSection;

#[function_component(ServicesPage)]
pub fn services_page() -> Html {
    html! {
        <div class="page-offset">
            <ServicesSection />
            <WebsiteSection />
            <AppSection />
            <SoftwareSection />
        </div>
    }
}
