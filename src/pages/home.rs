use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{HIGHLIGHTS, PROJECTS, TESTIMONIALS};
use crate::sections::hero::HeroSection;
use crate::sections::services::ServicesSection;
use crate::Route;

#[function_component(WhyChooseUs)]
fn why_choose_us() -> Html {
    html! {
        <section class="why-section">
            <style>
                {r#"
                    .why-section {
                        padding: 6rem 2rem;
                        background: linear-gradient(180deg, #f8fafc 0%, #fff 100%);
                    }
                    .why-header {
                        text-align: center;
                        max-width: 680px;
                        margin: 0 auto 4rem;
                    }
                    .why-header .section-pill {
                        display: inline-block;
                        padding: 0.35rem 1rem;
                        border-radius: 999px;
                        background: #ccfbf1;
                        color: #0f766e;
                        font-size: 0.85rem;
                        font-weight: 600;
                        margin-bottom: 1rem;
                    }
                    .why-header h2 {
                        font-size: 2.25rem;
                        color: #0f172a;
                        margin-bottom: 1rem;
                    }
                    .why-header p {
                        color: #475569;
                        line-height: 1.6;
                    }
                    .why-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(230px, 1fr));
                        gap: 2rem;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .why-card {
                        padding: 1.5rem;
                        background: #fff;
                        border: 1px solid #f1f5f9;
                        border-radius: 16px;
                        transition: border-color 0.3s ease;
                    }
                    .why-card:hover {
                        border-color: #99f6e4;
                    }
                    .why-card .why-glyph {
                        width: 3.5rem;
                        height: 3.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 12px;
                        background: linear-gradient(135deg, #14b8a6, #6366f1);
                        color: #fff;
                        font-size: 1.4rem;
                        margin-bottom: 1.25rem;
                    }
                    .why-card h3 {
                        color: #0f172a;
                        font-size: 1.15rem;
                        margin-bottom: 0.5rem;
                    }
                    .why-card p {
                        color: #475569;
                        font-size: 0.9rem;
                        line-height: 1.6;
                    }
                "#}
            </style>

            <div class="why-header">
                <span class="section-pill">{"Why Choose Us"}</span>
                <h2>{"Building Digital Excellence"}</h2>
                <p>
                    {"We combine cutting-edge technology with creative expertise to deliver \
                      solutions that drive growth."}
                </p>
            </div>

            <div class="why-grid">
                {
                    for HIGHLIGHTS.iter().map(|highlight| html! {
                        <div class="why-card">
                            <div class="why-glyph">{highlight_glyph(highlight.title)}</div>
                            <h3>{highlight.title}</h3>
                            <p>{highlight.description}</p>
                        </div>
                    })
                }
            </div>
        </section>
    }
}

fn highlight_glyph(title: &str) -> &'static str {
    match title {
        "Lightning Fast" => "⚡",
        "Secure & Reliable" => "🛡",
        "On-Time Delivery" => "⏱",
        _ => "🎧",
    }
}

#[function_component(FeaturedProjects)]
fn featured_projects() -> Html {
    let featured: Vec<_> = PROJECTS.iter().filter(|p| p.featured).collect();

    html! {
        <section class="featured-section">
            <style>
                {r#"
                    .featured-section {
                        padding: 6rem 2rem;
                        background: #f8fafc;
                    }
                    .featured-header {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: flex-end;
                        justify-content: space-between;
                        gap: 1.5rem;
                        max-width: 1100px;
                        margin: 0 auto 3rem;
                    }
                    .featured-header .section-pill {
                        display: inline-block;
                        padding: 0.35rem 1rem;
                        border-radius: 999px;
                        background: #f3e8ff;
                        color: #7e22ce;
                        font-size: 0.85rem;
                        font-weight: 600;
                        margin-bottom: 1rem;
                    }
                    .featured-header h2 {
                        font-size: 2.25rem;
                        color: #0f172a;
                    }
                    .featured-header a {
                        color: #0d9488;
                        font-weight: 600;
                        text-decoration: none;
                    }
                    .featured-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 2rem;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .featured-card {
                        display: block;
                        background: #fff;
                        border: 1px solid #f1f5f9;
                        border-radius: 16px;
                        overflow: hidden;
                        text-decoration: none;
                        transition: border-color 0.3s ease;
                    }
                    .featured-card:hover {
                        border-color: #e2e8f0;
                    }
                    .featured-card img {
                        width: 100%;
                        aspect-ratio: 4 / 3;
                        object-fit: cover;
                    }
                    .featured-card .featured-body {
                        padding: 1.5rem;
                    }
                    .featured-card .featured-category {
                        color: #0d9488;
                        font-size: 0.85rem;
                        font-weight: 500;
                    }
                    .featured-card h3 {
                        color: #0f172a;
                        margin-top: 0.25rem;
                    }
                "#}
            </style>

            <div class="featured-header">
                <div>
                    <span class="section-pill">{"Our Work"}</span>
                    <h2>{"Featured Projects"}</h2>
                </div>
                <Link<Route> to={Route::Portfolio}>
                    {"View All Projects →"}
                </Link<Route>>
            </div>

            <div class="featured-grid">
                {
                    for featured.iter().map(|project| html! {
                        <Link<Route> to={Route::Portfolio} classes="featured-card">
                            <img src={project.image} alt={project.title} loading="lazy" />
                            <div class="featured-body">
                                <span class="featured-category">{project.category.label()}</span>
                                <h3>{project.title}</h3>
                            </div>
                        </Link<Route>>
                    })
                }
            </div>
        </section>
    }
}

#[function_component(TestimonialsBlock)]
fn testimonials_block() -> Html {
    html! {
        <section class="testimonials-section">
            <style>
                {r#"
                    .testimonials-section {
                        padding: 6rem 2rem;
                        background: #fff;
                    }
                    .testimonials-header {
                        text-align: center;
                        max-width: 680px;
                        margin: 0 auto 4rem;
                    }
                    .testimonials-header .section-pill {
                        display: inline-block;
                        padding: 0.35rem 1rem;
                        border-radius: 999px;
                        background: #e0e7ff;
                        color: #4338ca;
                        font-size: 0.85rem;
                        font-weight: 600;
                        margin-bottom: 1rem;
                    }
                    .testimonials-header h2 {
                        font-size: 2.25rem;
                        color: #0f172a;
                        margin-bottom: 1rem;
                    }
                    .testimonials-header p {
                        color: #475569;
                        line-height: 1.6;
                    }
                    .testimonials-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 2rem;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .testimonial-card {
                        position: relative;
                        padding: 2rem;
                        background: linear-gradient(135deg, #f8fafc, #fff);
                        border: 1px solid #f1f5f9;
                        border-radius: 16px;
                    }
                    .testimonial-card .stars {
                        color: #facc15;
                        letter-spacing: 0.1em;
                        margin-bottom: 1rem;
                    }
                    .testimonial-card blockquote {
                        color: #334155;
                        line-height: 1.7;
                        margin: 0 0 1.5rem;
                    }
                    .testimonial-card .author-row {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }
                    .testimonial-card .author-initial {
                        width: 3rem;
                        height: 3rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 50%;
                        background: linear-gradient(135deg, #14b8a6, #6366f1);
                        color: #fff;
                        font-weight: 700;
                    }
                    .testimonial-card .author-name {
                        color: #0f172a;
                        font-weight: 600;
                    }
                    .testimonial-card .author-role {
                        color: #64748b;
                        font-size: 0.85rem;
                    }
                "#}
            </style>

            <div class="testimonials-header">
                <span class="section-pill">{"Testimonials"}</span>
                <h2>{"What Our Clients Say"}</h2>
                <p>
                    {"Don't just take our word for it. Here's what our clients have to say \
                      about working with us."}
                </p>
            </div>

            <div class="testimonials-grid">
                {
                    for TESTIMONIALS.iter().map(|testimonial| {
                        let stars: String = "★".repeat(usize::from(testimonial.rating));
                        let initial = testimonial.author.chars().next().unwrap_or('?');
                        html! {
                            <div class="testimonial-card">
                                <div class="stars">{stars}</div>
                                <blockquote>{testimonial.quote}</blockquote>
                                <div class="author-row">
                                    <div class="author-initial">{initial}</div>
                                    <div>
                                        <div class="author-name">{testimonial.author}</div>
                                        <div class="author-role">{testimonial.role}</div>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                }
            </div>
        </section>
    }
}

#[function_component(CallToAction)]
fn call_to_action() -> Html {
    html! {
        <section class="cta-section">
            <style>
                {r#"
                    .cta-section {
                        padding: 6rem 2rem;
                        background: linear-gradient(135deg, #0f172a 0%, #1e293b 50%, #0f172a 100%);
                        text-align: center;
                    }
                    .cta-section .section-pill {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        border-radius: 999px;
                        border: 1px solid rgba(45, 212, 191, 0.3);
                        background: rgba(45, 212, 191, 0.2);
                        color: #5eead4;
                        font-size: 0.85rem;
                        margin-bottom: 1.5rem;
                    }
                    .cta-section h2 {
                        font-size: clamp(1.75rem, 4vw, 3rem);
                        color: #f8fafc;
                        max-width: 760px;
                        margin: 0 auto 1.5rem;
                    }
                    .cta-section > p {
                        color: #cbd5e1;
                        font-size: 1.1rem;
                        max-width: 640px;
                        margin: 0 auto 2rem;
                    }
                    .cta-buttons {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1rem;
                    }
                    .cta-buttons a {
                        padding: 0.9rem 2rem;
                        border-radius: 999px;
                        font-weight: 600;
                        text-decoration: none;
                    }
                    .cta-buttons a.primary {
                        background: #14b8a6;
                        color: #fff;
                    }
                    .cta-buttons a.secondary {
                        border: 2px solid #14b8a6;
                        color: #5eead4;
                    }
                "#}
            </style>

            <span class="section-pill">{"🚀 Ready to Launch Your Project?"}</span>
            <h2>{"Let's Build Something Amazing Together"}</h2>
            <p>
                {"Transform your ideas into reality. Get a free consultation and quote for \
                  your next project."}
            </p>
            <div class="cta-buttons">
                <Link<Route> to={Route::Contact} classes="primary">
                    {"Get Free Quote"}
                </Link<Route>>
                <Link<Route> to={Route::Portfolio} classes="secondary">
                    {"View Our Work"}
                </Link<Route>>
            </div>
        </section>
    }
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <>
            <HeroSection />
            <ServicesSection />
            <WhyChooseUs />
            <FeaturedProjects />
            <TestimonialsBlock />
            <CallToAction />
        </>
    }
}
