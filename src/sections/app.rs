use yew::prelude::*;

const FEATURES: &[&str] = &["Secure Auth", "Push Notifications", "Offline Mode"];

/// Mock screen cards shown inside the phone frame.
const SCREENS: &[(&str, &str)] = &[
    ("Dashboard", "View your stats"),
    ("Projects", "3 active projects"),
    ("Messages", "5 new messages"),
];

#[function_component(AppSection)]
pub fn app_section() -> Html {
    html! {
        <section id="app-development" class="app-section">
            <style>
                {r#"
                    .app-section {
                        padding: 7rem 2rem;
                        background: #1e293b;
                    }
                    .app-columns {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        align-items: center;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    @media (max-width: 900px) {
                        .app-columns {
                            grid-template-columns: 1fr;
                        }
                        .app-columns .phone-mock {
                            order: 2;
                        }
                    }
                    .app-copy .section-tag {
                        display: inline-block;
                        padding: 0.35rem 1rem;
                        border-radius: 999px;
                        background: rgba(129, 140, 248, 0.1);
                        border: 1px solid rgba(129, 140, 248, 0.3);
                        color: #a5b4fc;
                        font-size: 0.8rem;
                        font-weight: 600;
                        margin-bottom: 1.25rem;
                    }
                    .app-copy h2 {
                        font-size: 2.25rem;
                        color: #f8fafc;
                        line-height: 1.2;
                        margin-bottom: 1.5rem;
                    }
                    .app-copy h2 span {
                        background: linear-gradient(90deg, #818cf8, #f472b6);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .app-copy p {
                        color: #94a3b8;
                        line-height: 1.7;
                        margin-bottom: 2rem;
                    }
                    .feature-chips {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.75rem;
                    }
                    .feature-chips span {
                        padding: 0.45rem 1rem;
                        border-radius: 999px;
                        border: 1px solid rgba(148, 163, 184, 0.3);
                        background: rgba(30, 41, 59, 0.5);
                        color: #e2e8f0;
                        font-size: 0.85rem;
                    }
                    .phone-mock {
                        width: 240px;
                        margin: 0 auto;
                        padding: 14px 10px;
                        border-radius: 32px;
                        background: #0f172a;
                        border: 1px solid rgba(148, 163, 184, 0.3);
                        animation: phone-sway 9s ease-in-out infinite;
                    }
                    @keyframes phone-sway {
                        0%, 100% { transform: rotateY(-10deg) rotateX(2deg); }
                        50% { transform: rotateY(8deg) rotateX(-2deg); }
                    }
                    .phone-notch {
                        width: 80px;
                        height: 6px;
                        margin: 0 auto 12px;
                        border-radius: 999px;
                        background: #334155;
                    }
                    .phone-card {
                        padding: 0.9rem 1rem;
                        margin-bottom: 0.75rem;
                        border-radius: 12px;
                        background: linear-gradient(135deg, rgba(129, 140, 248, 0.2), rgba(129, 140, 248, 0.05));
                        animation: card-pop 0.6s ease-out both;
                    }
                    .phone-card:nth-child(3) { animation-delay: 0.15s; }
                    .phone-card:nth-child(4) { animation-delay: 0.3s; }
                    @keyframes card-pop {
                        from { opacity: 0; transform: translateY(10px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .phone-card .screen-title {
                        color: #f8fafc;
                        font-size: 0.85rem;
                        font-weight: 500;
                    }
                    .phone-card .screen-desc {
                        color: #94a3b8;
                        font-size: 0.75rem;
                    }
                "#}
            </style>

            <div class="app-columns">
                <div class="phone-mock" aria-hidden="true">
                    <div class="phone-notch"></div>
                    {
                        for SCREENS.iter().map(|(title, desc)| html! {
                            <div class="phone-card">
                                <div class="screen-title">{*title}</div>
                                <div class="screen-desc">{*desc}</div>
                            </div>
                        })
                    }
                </div>

                <div class="app-copy">
                    <span class="section-tag">{"App Development"}</span>
                    <h2>
                        {"Apps Users "}<span>{"Love"}</span>
                    </h2>
                    <p>
                        {"Native and cross-platform mobile applications built for performance \
                          and polish. We take your app from idea to the app stores with \
                          experiences that keep users coming back."}
                    </p>
                    <div class="feature-chips">
                        { for FEATURES.iter().map(|feature| html! { <span>{*feature}</span> }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
