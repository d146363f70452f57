use yew::prelude::*;
use web_sys::MouseEvent;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

/// Smooth-scrolls to a same-page section by element id.
fn scroll_to_section(target: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(element) = document.get_element_by_id(target) {
                element.scroll_into_view();
            }
        }
    })
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    html! {
        <section id="home" class="hero-section">
            <style>
                {(r#"
                    .hero-section {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        background: #0f172a;
                    }
                    .hero-backdrop {
                        position: absolute;
                        inset: 0;
                        background-image: url("__BACKDROP__");
                        background-size: 40px 40px;
                        opacity: 0.25;
                    }
                    .hero-orb {
                        position: absolute;
                        border-radius: 50%;
                        filter: blur(40px);
                        will-change: transform;
                        animation: orb-drift 15s ease-in-out infinite;
                    }
                    .hero-orb.teal {
                        top: 25%;
                        left: 25%;
                        width: 24rem;
                        height: 24rem;
                        background: radial-gradient(circle, rgba(45, 212, 191, 0.15) 0%, transparent 70%);
                    }
                    .hero-orb.violet {
                        bottom: 25%;
                        right: 25%;
                        width: 20rem;
                        height: 20rem;
                        background: radial-gradient(circle, rgba(168, 85, 247, 0.15) 0%, transparent 70%);
                        animation-delay: 3s;
                    }
                    @keyframes orb-drift {
                        0%, 100% { transform: translate(0, 0); }
                        50% { transform: translate(30px, -20px); }
                    }
                    .hero-content {
                        position: relative;
                        z-index: 1;
                        max-width: 900px;
                        padding: 7rem 1.5rem 4rem;
                        text-align: center;
                        animation: hero-rise 0.8s ease-out;
                    }
                    @keyframes hero-rise {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .hero-badge {
                        display: inline-block;
                        padding: 0.4rem 1rem;
                        border-radius: 999px;
                        border: 1px solid rgba(45, 212, 191, 0.3);
                        background: rgba(45, 212, 191, 0.1);
                        color: #5eead4;
                        font-size: 0.85rem;
                        font-weight: 500;
                        margin-bottom: 1.5rem;
                    }
                    .hero-logo {
                        height: 10rem;
                        width: auto;
                        object-fit: contain;
                        margin-bottom: 2rem;
                        filter: drop-shadow(0 0 20px rgba(59, 130, 246, 0.5));
                    }
                    .hero-content h1 {
                        font-size: clamp(2rem, 6vw, 4rem);
                        line-height: 1.15;
                        color: #f8fafc;
                        margin-bottom: 1.5rem;
                    }
                    .hero-content h1 span {
                        background: linear-gradient(90deg, #2dd4bf, #818cf8);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .hero-content > p {
                        color: #94a3b8;
                        font-size: 1.1rem;
                        line-height: 1.7;
                        max-width: 640px;
                        margin: 0 auto 2.5rem;
                    }
                    .hero-service-chips {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1rem;
                        margin-bottom: 2.5rem;
                    }
                    .hero-service-chips span {
                        padding: 0.5rem 1.1rem;
                        border-radius: 999px;
                        border: 1px solid rgba(148, 163, 184, 0.3);
                        background: rgba(30, 41, 59, 0.5);
                        color: #e2e8f0;
                        font-size: 0.9rem;
                    }
                    .hero-cta-group {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1rem;
                    }
                    .hero-cta {
                        padding: 0.9rem 2rem;
                        border: none;
                        border-radius: 999px;
                        background: linear-gradient(90deg, #14b8a6, #6366f1);
                        color: #fff;
                        font-size: 1rem;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .hero-cta.ghost {
                        background: transparent;
                        border: 2px solid #2dd4bf;
                        color: #5eead4;
                    }
                    .hero-scroll-hint {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 1;
                        border: none;
                        background: none;
                        color: #64748b;
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.15em;
                        cursor: pointer;
                        animation: hint-bob 2s ease-in-out infinite;
                    }
                    @keyframes hint-bob {
                        0%, 100% { transform: translate(-50%, 0); }
                        50% { transform: translate(-50%, 10px); }
                    }
                    @media (max-width: 640px) {
                        .hero-logo { height: 6rem; }
                        .hero-scroll-hint { display: none; }
                    }
                "#).replace("__BACKDROP__", config::HERO_BACKDROP_PATH)}
            </style>

            <div class="hero-backdrop"></div>
            <div class="hero-orb teal"></div>
            <div class="hero-orb violet"></div>

            <div class="hero-content">
                <span class="hero-badge">{"✦ Crafting Digital Excellence"}</span>
                <img class="hero-logo" src={config::LOGO_PATH} alt="LMK SoftTech logo" />
                <h1>
                    {"Building the "}<span>{"Future"}</span><br />
                    {"of Digital Solutions"}
                </h1>
                <p>
                    {"We specialize in Website, App & Software Development. Transform your \
                      vision into reality with cutting-edge technology and exceptional design \
                      by Kishore L M."}
                </p>
                <div class="hero-service-chips">
                    <span>{"Web Development"}</span>
                    <span>{"App Development"}</span>
                    <span>{"Software Solutions"}</span>
                </div>
                <div class="hero-cta-group">
                    <button class="hero-cta" onclick={scroll_to_section("services")}>
                        {"Explore Services"}
                    </button>
                    <Link<Route> to={Route::Portfolio}>
                        <button class="hero-cta ghost">{"View Portfolio"}</button>
                    </Link<Route>>
                </div>
            </div>

            <button class="hero-scroll-hint" onclick={scroll_to_section("services")}>
                {"Scroll to explore ⌄"}
            </button>
        </section>
    }
}
