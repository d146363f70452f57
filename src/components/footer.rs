use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::CONTACT_CHANNELS;
use crate::Route;

const SERVICE_LINKS: [&str; 4] = [
    "Website Development",
    "App Development",
    "Software Development",
    "UI/UX Design",
];

const LEGAL_LINKS: [&str; 3] = ["Privacy Policy", "Terms of Service", "Cookie Policy"];

const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("GitHub", "#"),
    ("LinkedIn", "#"),
    ("Twitter", "#"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: #0b1120;
                        border-top: 1px solid rgba(148, 163, 184, 0.2);
                        padding: 4rem 2rem 2rem;
                        color: #94a3b8;
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: 2fr 1fr 1fr 1fr;
                        gap: 3rem;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    @media (max-width: 900px) {
                        .footer-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                    }
                    @media (max-width: 600px) {
                        .footer-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                    .footer-brand img {
                        height: 3.5rem;
                        width: auto;
                        object-fit: contain;
                        margin-bottom: 1rem;
                    }
                    .footer-brand p {
                        max-width: 22rem;
                        line-height: 1.6;
                        font-size: 0.9rem;
                        margin-bottom: 1.5rem;
                    }
                    .footer-brand .footer-channel {
                        display: block;
                        color: #94a3b8;
                        text-decoration: none;
                        font-size: 0.9rem;
                        margin-bottom: 0.6rem;
                    }
                    a.footer-channel:hover {
                        color: #e2e8f0;
                    }
                    .footer-column h4 {
                        color: #f8fafc;
                        font-size: 0.95rem;
                        margin-bottom: 1rem;
                    }
                    .footer-column ul {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    }
                    .footer-column li {
                        margin-bottom: 0.7rem;
                    }
                    .footer-column a {
                        color: #94a3b8;
                        text-decoration: none;
                        font-size: 0.875rem;
                    }
                    .footer-column a:hover {
                        color: #e2e8f0;
                    }
                    .footer-bottom {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                        max-width: 1100px;
                        margin: 3rem auto 0;
                        padding-top: 2rem;
                        border-top: 1px solid rgba(148, 163, 184, 0.2);
                        font-size: 0.85rem;
                    }
                    .footer-social {
                        display: flex;
                        gap: 1rem;
                    }
                    .footer-social a {
                        padding: 0.4rem 0.8rem;
                        border-radius: 8px;
                        background: rgba(30, 41, 59, 0.5);
                        color: #94a3b8;
                        text-decoration: none;
                        font-size: 0.8rem;
                    }
                    .footer-social a:hover {
                        color: #e2e8f0;
                    }
                "#}
            </style>

            <div class="footer-grid">
                <div class="footer-brand">
                    <img src={config::LOGO_PATH} alt="LMK SoftTech" />
                    <p>
                        {"Transforming ideas into digital reality. We create innovative \
                          websites, mobile apps, and software solutions that drive business \
                          growth."}
                    </p>
                    {
                        for CONTACT_CHANNELS.iter().map(|channel| {
                            if let Some(href) = channel.href {
                                html! { <a class="footer-channel" href={href}>{channel.value}</a> }
                            } else {
                                html! { <span class="footer-channel">{channel.value}</span> }
                            }
                        })
                    }
                </div>

                <div class="footer-column">
                    <h4>{"Services"}</h4>
                    <ul>
                        {
                            for SERVICE_LINKS.iter().map(|label| html! {
                                <li><Link<Route> to={Route::Services}>{*label}</Link<Route>></li>
                            })
                        }
                    </ul>
                </div>

                <div class="footer-column">
                    <h4>{"Company"}</h4>
                    <ul>
                        <li><Link<Route> to={Route::About}>{"About Us"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Portfolio}>{"Portfolio"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>></li>
                        <li><a href="#">{"Careers"}</a></li>
                    </ul>
                </div>

                <div class="footer-column">
                    <h4>{"Legal"}</h4>
                    <ul>
                        {
                            for LEGAL_LINKS.iter().map(|label| html! {
                                <li><a href="#">{*label}</a></li>
                            })
                        }
                    </ul>
                </div>
            </div>

            <div class="footer-bottom">
                <span>
                    {format!("© {} LMK SoftTech. All rights reserved. Developed by Kishore L M.", year)}
                </span>
                <div class="footer-social">
                    {
                        for SOCIAL_LINKS.iter().map(|(label, href)| html! {
                            <a href={*href} aria-label={*label}>{*label}</a>
                        })
                    }
                </div>
            </div>
        </footer>
    }
}
