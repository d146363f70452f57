use yew::prelude::*;

const FEATURES: &[&str] = &[
    "Database Design",
    "Security First",
    "Version Control",
    "Cloud Deployment",
];

#[function_component(SoftwareSection)]
pub fn software_section() -> Html {
    html! {
        <section id="software-development" class="software-section">
            <style>
                {r#"
                    .software-section {
                        padding: 7rem 2rem;
                        background: linear-gradient(180deg, #1e293b 0%, #0f172a 100%);
                    }
                    .software-columns {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        align-items: center;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    @media (max-width: 900px) {
                        .software-columns {
                            grid-template-columns: 1fr;
                        }
                    }
                    .software-copy .section-tag {
                        display: inline-block;
                        padding: 0.35rem 1rem;
                        border-radius: 999px;
                        background: rgba(244, 114, 182, 0.1);
                        border: 1px solid rgba(244, 114, 182, 0.3);
                        color: #f9a8d4;
                        font-size: 0.8rem;
                        font-weight: 600;
                        margin-bottom: 1.25rem;
                    }
                    .software-copy h2 {
                        font-size: 2.25rem;
                        color: #f8fafc;
                        line-height: 1.2;
                        margin-bottom: 1.5rem;
                    }
                    .software-copy h2 span {
                        background: linear-gradient(90deg, #f472b6, #818cf8);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .software-copy p {
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
                    .terminal-mock {
                        max-width: 460px;
                        margin: 0 auto;
                        border-radius: 12px;
                        border: 1px solid rgba(148, 163, 184, 0.3);
                        background: #0d1117;
                        overflow: hidden;
                    }
                    .terminal-bar {
                        display: flex;
                        gap: 6px;
                        padding: 0.6rem 0.9rem;
                        background: #161b22;
                    }
                    .terminal-bar i {
                        width: 10px;
                        height: 10px;
                        border-radius: 50%;
                        background: #334155;
                    }
                    .terminal-body {
                        padding: 1rem 1.2rem 1.5rem;
                        font-family: monospace;
                        font-size: 0.8rem;
                        color: #7dd3fc;
                    }
                    .terminal-body .prompt-line {
                        margin-bottom: 0.5rem;
                        animation: fade-up 0.5s ease-out both;
                    }
                    .terminal-body .prompt-line:nth-child(2) { animation-delay: 0.4s; }
                    .terminal-body .prompt-line:nth-child(3) { animation-delay: 0.8s; }
                    .terminal-body .prompt-line:nth-child(4) { animation-delay: 1.2s; }
                    .terminal-body .ok { color: #4ade80; }
                    @keyframes fade-up {
                        from { opacity: 0; transform: translateY(6px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                "#}
            </style>

            <div class="software-columns">
                <div class="software-copy">
                    <span class="section-tag">{"Software Development"}</span>
                    <h2>
                        {"Software That "}<span>{"Scales"}</span>
                    </h2>
                    <p>
                        {"Custom CRM, ERP, and desktop solutions that streamline your \
                          operations. We design the data model, the integrations, and the \
                          deployment pipeline, so the system grows with your business."}
                    </p>
                    <div class="feature-chips">
                        { for FEATURES.iter().map(|feature| html! { <span>{*feature}</span> }) }
                    </div>
                </div>

                <div class="terminal-mock" aria-hidden="true">
                    <div class="terminal-bar"><i></i><i></i><i></i></div>
                    <div class="terminal-body">
                        <div class="prompt-line">{"$ build --release"}</div>
                        <div class="prompt-line">{"Compiling modules (42/42)"}</div>
                        <div class="prompt-line ok">{"✓ All checks passed"}</div>
                        <div class="prompt-line">{"$ deploy production"}</div>
                    </div>
                </div>
            </div>
        </section>
    }
}
