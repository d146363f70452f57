use yew::prelude::*;
use web_sys::MouseEvent;

use crate::content::{Category, Project, PROJECTS};

/// How many technology chips a card shows before collapsing into "+N".
const CARD_TECH_LIMIT: usize = 3;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Filter {
    All,
    Only(Category),
}

impl Filter {
    /// One chip per choice in the filter row, `All` first, then the
    /// categories in declaration order.
    pub const CHOICES: [Filter; 4] = [
        Filter::All,
        Filter::Only(Category::ALL[0]),
        Filter::Only(Category::ALL[1]),
        Filter::Only(Category::ALL[2]),
    ];

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Only(category) => category.label(),
        }
    }

    pub fn admits(self, project: &Project) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(category) => project.category == category,
        }
    }
}

/// Gallery view state: the active filter chip and, when a card has been
/// clicked, the project the detail overlay shows. The selection is always
/// a reference into [`PROJECTS`], never a synthesized record.
#[derive(Clone, Copy, PartialEq)]
pub struct Gallery {
    pub filter: Filter,
    pub selected: Option<&'static Project>,
}

impl Gallery {
    pub fn new() -> Self {
        Gallery { filter: Filter::All, selected: None }
    }

    pub fn visible(&self) -> Vec<&'static Project> {
        PROJECTS.iter().filter(|p| self.filter.admits(p)).collect()
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn open(&mut self, project: &'static Project) {
        self.selected = Some(project);
    }

    /// Idempotent; the filtered list is untouched.
    pub fn close(&mut self) {
        self.selected = None;
    }
}

fn project_card(gallery: &UseStateHandle<Gallery>, project: &'static Project) -> Html {
    let open = {
        let gallery = gallery.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *gallery;
            next.open(project);
            gallery.set(next);
        })
    };

    let shown = &project.technologies[..CARD_TECH_LIMIT.min(project.technologies.len())];
    let overflow = project.technologies.len().saturating_sub(CARD_TECH_LIMIT);

    html! {
        <div class="project-card" key={project.id.to_string()} onclick={open}>
            <div class="project-card-media">
                <img src={project.image} alt={project.title} loading="lazy" />
                <span class="project-card-category">{project.category.label()}</span>
                {
                    if project.featured {
                        html! { <span class="project-card-featured">{"★ Featured"}</span> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <div class="project-card-body">
                <h3>{project.title}</h3>
                <p>{project.description}</p>
                <div class="project-card-tech">
                    { for shown.iter().map(|tech| html! { <span class="tech-chip">{*tech}</span> }) }
                    {
                        if overflow > 0 {
                            html! { <span class="tech-chip tech-chip-more">{format!("+{}", overflow)}</span> }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
        </div>
    }
}

fn detail_overlay(gallery: &UseStateHandle<Gallery>, project: &'static Project) -> Html {
    let close = {
        let gallery = gallery.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *gallery;
            next.close();
            gallery.set(next);
        })
    };

    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="project-overlay" onclick={close.clone()}>
            <div class="project-overlay-panel" onclick={keep_open}>
                <button class="project-overlay-close" onclick={close}>{"✕"}</button>
                <div class="project-overlay-media">
                    <img src={project.image} alt={project.title} />
                    <span class="project-card-category">{project.category.label()}</span>
                </div>
                <div class="project-overlay-body">
                    <h3>{project.title}</h3>
                    <p>{project.description}</p>
                    <h4>{"Technologies Used"}</h4>
                    <div class="project-card-tech">
                        { for project.technologies.iter().map(|tech| html! { <span class="tech-chip">{*tech}</span> }) }
                    </div>
                    {
                        if let Some(url) = project.url {
                            html! {
                                <a class="project-overlay-link" href={url} target="_blank" rel="noopener noreferrer">
                                    {"View Live Project →"}
                                </a>
                            }
                        } else {
                            html! {
                                <button class="project-overlay-link coming-soon" disabled={true}>
                                    {"Coming Soon"}
                                </button>
                            }
                        }
                    }
                </div>
            </div>
        </div>
    }
}

#[function_component(PortfolioSection)]
pub fn portfolio_section() -> Html {
    let gallery = use_state(Gallery::new);

    let visible = gallery.visible();

    html! {
        <section id="portfolio" class="portfolio-section">
            <style>
                {r#"
                    .portfolio-section {
                        padding: 6rem 2rem;
                        background: linear-gradient(180deg, #fff 0%, #f8fafc 50%, #fff 100%);
                    }
                    .portfolio-header {
                        text-align: center;
                        max-width: 720px;
                        margin: 0 auto 3rem;
                    }
                    .portfolio-header h2 {
                        font-size: 2.5rem;
                        color: #0f172a;
                        margin-bottom: 1rem;
                    }
                    .portfolio-header h2 span {
                        background: linear-gradient(90deg, #14b8a6, #6366f1, #a855f7);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .portfolio-header p {
                        color: #475569;
                        line-height: 1.6;
                    }
                    .portfolio-filters {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 0.75rem;
                        margin-bottom: 3rem;
                    }
                    .filter-chip {
                        padding: 0.6rem 1.25rem;
                        border-radius: 12px;
                        border: 1px solid #e2e8f0;
                        background: #fff;
                        color: #475569;
                        font-size: 0.9rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .filter-chip:hover {
                        border-color: #5eead4;
                        color: #0d9488;
                    }
                    .filter-chip.active {
                        background: linear-gradient(90deg, #14b8a6, #6366f1);
                        border-color: transparent;
                        color: #fff;
                    }
                    .portfolio-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                        gap: 2rem;
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .project-card {
                        background: #fff;
                        border: 1px solid #f1f5f9;
                        border-radius: 16px;
                        overflow: hidden;
                        cursor: pointer;
                        transition: transform 0.3s ease, border-color 0.3s ease;
                    }
                    .project-card:hover {
                        transform: translateY(-4px);
                        border-color: #e2e8f0;
                    }
                    .project-card-media {
                        position: relative;
                        aspect-ratio: 4 / 3;
                        overflow: hidden;
                    }
                    .project-card-media img,
                    .project-overlay-media img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .project-card-category {
                        position: absolute;
                        top: 1rem;
                        left: 1rem;
                        padding: 0.35rem 0.9rem;
                        border-radius: 999px;
                        background: linear-gradient(90deg, #14b8a6, #6366f1);
                        color: #fff;
                        font-size: 0.75rem;
                        font-weight: 600;
                    }
                    .project-card-featured {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        padding: 0.35rem 0.9rem;
                        border-radius: 999px;
                        background: rgba(255, 255, 255, 0.9);
                        color: #334155;
                        font-size: 0.75rem;
                        font-weight: 600;
                    }
                    .project-card-body {
                        padding: 1.5rem;
                    }
                    .project-card-body h3 {
                        color: #0f172a;
                        margin-bottom: 0.5rem;
                    }
                    .project-card-body p {
                        color: #475569;
                        font-size: 0.9rem;
                        line-height: 1.5;
                        margin-bottom: 1rem;
                        display: -webkit-box;
                        -webkit-line-clamp: 2;
                        -webkit-box-orient: vertical;
                        overflow: hidden;
                    }
                    .project-card-tech {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                    }
                    .tech-chip {
                        padding: 0.3rem 0.7rem;
                        border-radius: 8px;
                        background: #f1f5f9;
                        color: #475569;
                        font-size: 0.75rem;
                        font-weight: 500;
                    }
                    .tech-chip-more {
                        color: #64748b;
                    }
                    .portfolio-empty {
                        text-align: center;
                        padding: 4rem 0;
                        color: #64748b;
                        font-size: 1.1rem;
                    }
                    .project-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1.5rem;
                        background: rgba(15, 23, 42, 0.8);
                        backdrop-filter: blur(8px);
                    }
                    .project-overlay-panel {
                        position: relative;
                        width: 100%;
                        max-width: 760px;
                        max-height: 90vh;
                        overflow-y: auto;
                        background: #fff;
                        border-radius: 24px;
                    }
                    .project-overlay-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        z-index: 1;
                        width: 2.5rem;
                        height: 2.5rem;
                        border: none;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.85);
                        color: #475569;
                        font-size: 1rem;
                        cursor: pointer;
                    }
                    .project-overlay-media {
                        position: relative;
                        aspect-ratio: 16 / 9;
                        overflow: hidden;
                    }
                    .project-overlay-media .project-card-category {
                        top: auto;
                        bottom: 1.25rem;
                        left: 1.25rem;
                    }
                    .project-overlay-body {
                        padding: 2rem;
                    }
                    .project-overlay-body h3 {
                        font-size: 1.75rem;
                        color: #0f172a;
                        margin-bottom: 0.75rem;
                    }
                    .project-overlay-body p {
                        color: #475569;
                        line-height: 1.7;
                        margin-bottom: 1.5rem;
                    }
                    .project-overlay-body h4 {
                        color: #334155;
                        font-size: 0.9rem;
                        margin-bottom: 0.75rem;
                    }
                    .project-overlay-link {
                        display: block;
                        width: 100%;
                        margin-top: 2rem;
                        padding: 1rem;
                        border: none;
                        border-radius: 12px;
                        background: linear-gradient(90deg, #14b8a6, #6366f1);
                        color: #fff;
                        font-weight: 600;
                        text-align: center;
                        text-decoration: none;
                        cursor: pointer;
                    }
                    .project-overlay-link.coming-soon {
                        background: #e2e8f0;
                        color: #64748b;
                        cursor: not-allowed;
                    }
                "#}
            </style>

            <div class="portfolio-header">
                <h2>{"Our "}<span>{"Featured Work"}</span></h2>
                <p>
                    {"Explore our portfolio of successful projects that showcase our expertise \
                      in web development, mobile apps, and software solutions."}
                </p>
            </div>

            <div class="portfolio-filters">
                {
                    for Filter::CHOICES.iter().map(|choice| {
                        let choice = *choice;
                        let set_filter = {
                            let gallery = gallery.clone();
                            Callback::from(move |_: MouseEvent| {
                                let mut next = *gallery;
                                next.set_filter(choice);
                                gallery.set(next);
                            })
                        };
                        html! {
                            <button
                                class={classes!("filter-chip", (gallery.filter == choice).then(|| "active"))}
                                onclick={set_filter}
                            >
                                {choice.label()}
                            </button>
                        }
                    })
                }
            </div>

            {
                if visible.is_empty() {
                    html! { <div class="portfolio-empty">{"No projects in this category yet."}</div> }
                } else {
                    html! {
                        <div class="portfolio-grid">
                            { for visible.iter().copied().map(|project| project_card(&gallery, project)) }
                        </div>
                    }
                }
            }

            {
                if let Some(project) = gallery.selected {
                    detail_overlay(&gallery, project)
                } else {
                    html! {}
                }
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_filter_shows_every_project() {
        let gallery = Gallery::new();
        assert_eq!(gallery.filter, Filter::All);
        assert_eq!(gallery.visible().len(), PROJECTS.len());
    }

    #[test]
    fn category_filters_show_exactly_their_subset() {
        let mut gallery = Gallery::new();
        for category in Category::ALL {
            gallery.set_filter(Filter::Only(category));
            let visible = gallery.visible();
            assert!(visible.iter().all(|p| p.category == category));
            let expected = PROJECTS.iter().filter(|p| p.category == category).count();
            assert_eq!(visible.len(), expected);
        }
    }

    #[test]
    fn mobile_app_filter_narrows_to_the_flood_app() {
        let mut gallery = Gallery::new();
        gallery.set_filter(Filter::Only(Category::MobileApp));
        let visible = gallery.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "AquaRescue App");
    }

    #[test]
    fn filtering_never_invents_projects() {
        let mut gallery = Gallery::new();
        for choice in Filter::CHOICES {
            gallery.set_filter(choice);
            for project in gallery.visible() {
                assert!(PROJECTS.iter().any(|p| std::ptr::eq(p, project)));
            }
        }
    }

    #[test]
    fn opening_selects_a_static_list_member() {
        let mut gallery = Gallery::new();
        gallery.open(&PROJECTS[1]);
        let selected = gallery.selected.unwrap();
        assert!(PROJECTS.iter().any(|p| std::ptr::eq(p, selected)));
    }

    #[test]
    fn closing_clears_and_is_idempotent() {
        let mut gallery = Gallery::new();
        gallery.open(&PROJECTS[0]);
        gallery.close();
        assert_eq!(gallery.selected, None);
        gallery.close();
        assert_eq!(gallery.selected, None);
    }

    #[test]
    fn open_close_cycle_leaves_the_filtered_list_unchanged() {
        let mut gallery = Gallery::new();
        gallery.set_filter(Filter::Only(Category::MobileApp));
        let before = gallery.visible();
        gallery.open(before[0]);
        gallery.close();
        assert_eq!(gallery.visible(), before);
        assert_eq!(gallery.filter, Filter::Only(Category::MobileApp));
    }

    #[test]
    fn cards_overflow_past_the_chip_limit() {
        let project = &PROJECTS[1];
        assert!(project.technologies.len() > CARD_TECH_LIMIT);
    }
}
