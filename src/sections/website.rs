use yew::prelude::*;

const FEATURES: &[&str] = &[
    "Clean Code",
    "Responsive Design",
    "Fast Loading",
    "SEO Optimized",
    "Cloud Ready",
];

#[function_component(WebsiteSection)]
pub fn website_section() -> Html {
    html! {
        <section id="website-development" class="website-section">
            <style>
                {r#"
                    .website-section {
                        padding: 7rem 2rem;
                        background: linear-gradient(180deg, #0f172a 0%, #1e293b 100%);
                    }
                    .website-columns {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        align-items: center;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    @media (max-width: 900px) {
                        .website-columns {
                            grid-template-columns: 1fr;
                        }
                    }
                    .website-copy .section-tag {
                        display: inline-block;
                        padding: 0.35rem 1rem;
                        border-radius: 999px;
                        background: rgba(45, 212, 191, 0.1);
                        border: 1px solid rgba(45, 212, 191, 0.3);
                        color: #5eead4;
                        font-size: 0.8rem;
                        font-weight: 600;
                        margin-bottom: 1.25rem;
                    }
                    .website-copy h2 {
                        font-size: 2.25rem;
                        color: #f8fafc;
                        line-height: 1.2;
                        margin-bottom: 1.5rem;
                    }
                    .website-copy h2 span {
                        background: linear-gradient(90deg, #2dd4bf, #818cf8);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .website-copy p {
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
                    .laptop-mock {
                        max-width: 500px;
                        margin: 0 auto;
                        perspective: 1200px;
                    }
                    .laptop-screen {
                        aspect-ratio: 16 / 10;
                        border: 10px solid #1e293b;
                        border-radius: 12px;
                        background: #0d1117;
                        overflow: hidden;
                        animation: laptop-tilt 8s ease-in-out infinite;
                    }
                    @keyframes laptop-tilt {
                        0%, 100% { transform: rotateX(8deg) rotateY(-6deg); }
                        50% { transform: rotateX(0deg) rotateY(4deg); }
                    }
                    .laptop-base {
                        height: 14px;
                        margin: 0 -6%;
                        border-radius: 0 0 14px 14px;
                        background: #334155;
                    }
                    .code-line {
                        height: 0.6rem;
                        margin: 0.7rem 1rem;
                        border-radius: 4px;
                        background: linear-gradient(90deg, #2dd4bf33, #818cf833);
                        animation: code-type 3s ease-in-out infinite;
                    }
                    .code-line:nth-child(2) { width: 70%; animation-delay: 0.3s; }
                    .code-line:nth-child(3) { width: 85%; animation-delay: 0.6s; }
                    .code-line:nth-child(4) { width: 55%; animation-delay: 0.9s; }
                    .code-line:nth-child(5) { width: 75%; animation-delay: 1.2s; }
                    @keyframes code-type {
                        0% { opacity: 0.3; }
                        50% { opacity: 1; }
                        100% { opacity: 0.3; }
                    }
                "#}
            </style>

            <div class="website-columns">
                <div class="website-copy">
                    <span class="section-tag">{"Website Development"}</span>
                    <h2>
                        {"Websites "}<span>{"That Convert"}</span>
                    </h2>
                    <p>
                        {"We create responsive, fast-loading websites that not only look \
                          beautiful but also drive results. From corporate websites to \
                          e-commerce platforms, we deliver digital experiences that captivate \
                          your audience."}
                    </p>
                    <div class="feature-chips">
                        { for FEATURES.iter().map(|feature| html! { <span>{*feature}</span> }) }
                    </div>
                </div>

                <div class="laptop-mock" aria-hidden="true">
                    <div class="laptop-screen">
                        <div class="code-line" style="width: 60%;"></div>
                        <div class="code-line"></div>
                        <div class="code-line"></div>
                        <div class="code-line"></div>
                        <div class="code-line"></div>
                    </div>
                    <div class="laptop-base"></div>
                </div>
            </div>
        </section>
    }
}
