use yew::prelude::*;

use crate::sections::portfolio::PortfolioSection;

#[function_component(PortfolioPage)]
pub fn portfolio_page() -> Html {
    html! {
        <div class="page-offset">
            <PortfolioSection />
        </div>
    }
}
