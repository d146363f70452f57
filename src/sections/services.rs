use yew::prelude::*;

use crate::content::SERVICES;

#[function_component(ServicesSection)]
pub fn services_section() -> Html {
    html! {
        <section id="services" class="services-section">
            <style>
                {r#"
                    .services-section {
                        padding: 7rem 2rem;
                        background: #0f172a;
                    }
                    .services-header {
                        text-align: center;
                        max-width: 720px;
                        margin: 0 auto 4rem;
                    }
                    .services-header h2 {
                        font-size: 2.5rem;
                        color: #f8fafc;
                        margin-bottom: 1rem;
                    }
                    .services-header h2 span {
                        background: linear-gradient(90deg, #2dd4bf, #818cf8);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .services-header p {
                        color: #94a3b8;
                        line-height: 1.6;
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 2rem;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .service-card {
                        display: flex;
                        flex-direction: column;
                        padding: 2rem;
                        border: 1px solid rgba(148, 163, 184, 0.2);
                        border-radius: 16px;
                        background: rgba(30, 41, 59, 0.5);
                        backdrop-filter: blur(10px);
                        transition: border-color 0.3s ease, transform 0.3s ease;
                    }
                    .service-card:hover {
                        transform: translateY(-4px);
                    }
                    .service-card.teal:hover { border-color: rgba(45, 212, 191, 0.5); }
                    .service-card.indigo:hover { border-color: rgba(129, 140, 248, 0.5); }
                    .service-card.pink:hover { border-color: rgba(244, 114, 182, 0.5); }
                    .service-card .service-glyph {
                        width: 3.5rem;
                        height: 3.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 12px;
                        font-size: 1.5rem;
                        margin-bottom: 1.5rem;
                    }
                    .service-card.teal .service-glyph { background: linear-gradient(135deg, #14b8a6, rgba(20, 184, 166, 0.5)); }
                    .service-card.indigo .service-glyph { background: linear-gradient(135deg, #6366f1, rgba(99, 102, 241, 0.5)); }
                    .service-card.pink .service-glyph { background: linear-gradient(135deg, #ec4899, rgba(236, 72, 153, 0.5)); }
                    .service-card h3 {
                        color: #f8fafc;
                        font-size: 1.25rem;
                        margin-bottom: 0.75rem;
                    }
                    .service-card > p {
                        color: #94a3b8;
                        font-size: 0.9rem;
                        line-height: 1.6;
                        margin-bottom: 1.5rem;
                    }
                    .service-card ul {
                        margin-top: auto;
                        list-style: none;
                        padding: 0;
                    }
                    .service-card li {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: #94a3b8;
                        font-size: 0.85rem;
                        margin-bottom: 0.5rem;
                    }
                    .service-card li::before {
                        content: '';
                        width: 6px;
                        height: 6px;
                        border-radius: 50%;
                        flex-shrink: 0;
                    }
                    .service-card.teal li::before { background: #2dd4bf; }
                    .service-card.indigo li::before { background: #818cf8; }
                    .service-card.pink li::before { background: #f472b6; }
                "#}
            </style>

            <div class="services-header">
                <h2>{"What We "}<span>{"Offer"}</span></h2>
                <p>
                    {"Comprehensive digital solutions tailored to your business needs. \
                      From concept to launch, we've got you covered."}
                </p>
            </div>

            <div class="services-grid">
                {
                    for SERVICES.iter().map(|service| html! {
                        <div class={classes!("service-card", service.accent)}>
                            <div class="service-glyph">{service_glyph(service.accent)}</div>
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                            <ul>
                                { for service.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                            </ul>
                        </div>
                    })
                }
            </div>
        </section>
    }
}

fn service_glyph(accent: &str) -> &'static str {
    match accent {
        "teal" => "⌨",
        "indigo" => "📱",
        _ => "🖥",
    }
}
