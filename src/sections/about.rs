use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{EXPERTISE, STATS, VALUES};
use crate::Route;

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    html! {
        <section id="about" class="about-section">
            <style>
                {r#"
                    .about-section {
                        padding: 6rem 2rem;
                        background: linear-gradient(180deg, #f8fafc 0%, #fff 50%, #f8fafc 100%);
                    }
                    .about-header {
                        text-align: center;
                        max-width: 780px;
                        margin: 0 auto 3.5rem;
                    }
                    .about-header h2 {
                        font-size: 2.5rem;
                        color: #0f172a;
                        margin-bottom: 1rem;
                    }
                    .about-header h2 span {
                        background: linear-gradient(90deg, #14b8a6, #6366f1, #a855f7);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .about-header p {
                        color: #475569;
                        line-height: 1.7;
                    }
                    .about-stats {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 2rem;
                        margin-bottom: 4rem;
                    }
                    .stat-card {
                        width: 16rem;
                        padding: 1.5rem;
                        text-align: center;
                        background: #fff;
                        border: 1px solid #f1f5f9;
                        border-radius: 16px;
                    }
                    .stat-card .stat-value {
                        font-size: 2rem;
                        font-weight: 700;
                        color: #0f172a;
                    }
                    .stat-card .stat-label {
                        color: #64748b;
                        font-size: 0.9rem;
                        margin-top: 0.25rem;
                    }
                    .about-columns {
                        display: grid;
                        grid-template-columns: 2fr 3fr;
                        gap: 3rem;
                        align-items: start;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    @media (max-width: 900px) {
                        .about-columns {
                            grid-template-columns: 1fr;
                        }
                    }
                    .founder-card {
                        position: relative;
                        padding: 2rem;
                        text-align: center;
                        background: #fff;
                        border: 1px solid #f1f5f9;
                        border-radius: 24px;
                        overflow: hidden;
                    }
                    .founder-card::before {
                        content: '';
                        position: absolute;
                        top: 0;
                        left: 0;
                        right: 0;
                        height: 8rem;
                        background: linear-gradient(135deg, #14b8a6, #6366f1, #a855f7);
                        opacity: 0.1;
                    }
                    .founder-monogram {
                        position: relative;
                        width: 8rem;
                        height: 8rem;
                        margin: 0 auto 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 16px;
                        background: linear-gradient(135deg, #14b8a6, #6366f1, #a855f7);
                    }
                    .founder-monogram span {
                        width: calc(100% - 8px);
                        height: calc(100% - 8px);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 12px;
                        background: #fff;
                        font-size: 2rem;
                        font-weight: 700;
                        background-clip: border-box;
                        color: #0d9488;
                    }
                    .founder-card h3 {
                        color: #0f172a;
                        margin-bottom: 0.25rem;
                    }
                    .founder-card .founder-role {
                        color: #0d9488;
                        font-size: 0.9rem;
                        font-weight: 600;
                        margin-bottom: 1rem;
                    }
                    .founder-card > p {
                        color: #475569;
                        font-size: 0.9rem;
                        line-height: 1.6;
                        margin-bottom: 1.5rem;
                    }
                    .expertise-chips {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 0.5rem;
                    }
                    .expertise-chips span {
                        padding: 0.35rem 0.8rem;
                        border-radius: 999px;
                        background: #f1f5f9;
                        color: #475569;
                        font-size: 0.8rem;
                    }
                    .values-list {
                        display: grid;
                        gap: 1.5rem;
                    }
                    .value-card {
                        display: flex;
                        gap: 1.25rem;
                        padding: 1.5rem;
                        background: #fff;
                        border: 1px solid #f1f5f9;
                        border-radius: 16px;
                    }
                    .value-card .value-glyph {
                        flex-shrink: 0;
                        width: 3.5rem;
                        height: 3.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 12px;
                        background: linear-gradient(135deg, #14b8a6, #6366f1);
                        color: #fff;
                        font-size: 1.4rem;
                    }
                    .value-card h4 {
                        color: #0f172a;
                        margin-bottom: 0.4rem;
                    }
                    .value-card p {
                        color: #475569;
                        font-size: 0.9rem;
                        line-height: 1.6;
                    }
                    .about-cta {
                        margin-top: 2rem;
                        text-align: center;
                    }
                    .about-cta a {
                        display: inline-block;
                        padding: 0.9rem 2rem;
                        border-radius: 999px;
                        background: linear-gradient(90deg, #14b8a6, #6366f1);
                        color: #fff;
                        font-weight: 600;
                        text-decoration: none;
                    }
                "#}
            </style>

            <div class="about-header">
                <h2>{"Meet the Team Behind "}<span>{"LMK SoftTech"}</span></h2>
                <p>
                    {"We're passionate about transforming ideas into exceptional digital \
                      experiences. Our commitment to innovation and quality drives everything \
                      we do."}
                </p>
            </div>

            <div class="about-stats">
                {
                    for STATS.iter().map(|stat| html! {
                        <div class="stat-card">
                            <div class="stat-value">{stat.value}</div>
                            <div class="stat-label">{stat.label}</div>
                        </div>
                    })
                }
            </div>

            <div class="about-columns">
                <div class="founder-card">
                    <div class="founder-monogram"><span>{"LMK"}</span></div>
                    <h3>{"Kishore L M"}</h3>
                    <div class="founder-role">{"Founder & Lead Developer"}</div>
                    <p>
                        {"Full-stack developer with a love for clean architecture and \
                          pixel-perfect interfaces, turning client ideas into shipped \
                          products across web, mobile, and desktop."}
                    </p>
                    <div class="expertise-chips">
                        { for EXPERTISE.iter().map(|skill| html! { <span>{*skill}</span> }) }
                    </div>
                </div>

                <div class="values-list">
                    {
                        for VALUES.iter().map(|value| html! {
                            <div class="value-card">
                                <div class="value-glyph">{value_glyph(value.title)}</div>
                                <div>
                                    <h4>{value.title}</h4>
                                    <p>{value.description}</p>
                                </div>
                            </div>
                        })
                    }
                </div>
            </div>

            <div class="about-cta">
                <Link<Route> to={Route::Contact}>
                    {"Start a Project With Us →"}
                </Link<Route>>
            </div>
        </section>
    }
}

fn value_glyph(title: &str) -> &'static str {
    match title {
        "Client-Focused" => "◎",
        "Innovation" => "🚀",
        "Passion" => "♥",
        _ => "✦",
    }
}
