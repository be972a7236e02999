use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::app::SidebarHandle;
use crate::browser::sleep;
use crate::catalog::{catalog, CategoryFilter, ProjectRecord, Rating};
use crate::config::SiteConfig;
use crate::contact::{ContactForm, Field, ProjectType};
use crate::content::{
    about_html, CHANNELS, CONTACT_STATS, OVERVIEW_STATS, RECENT_ACTIVITY, SKILLS, SOCIAL_LINKS,
};
use crate::filter::{filter_projects, FilterCriteria};

#[component]
pub fn Overview() -> impl IntoView {
    let navigate = use_navigate();
    let to_contact = navigate.clone();

    view! {
        <div class="page">
            <section class="hero">
                <span class="hero-kicker">"React.js Developer"</span>
                <h1>
                    "Building Digital"
                    <span class="hero-accent">"Experiences"</span>
                </h1>
                <p>"Building tomorrow's web: fast, scalable, and pixel-perfect"</p>
                <div style="display: flex; flex-wrap: wrap; gap: 1rem;">
                    <button class="secondary" on:click=move |_| navigate("/projects", Default::default())>
                        "View My Work"
                    </button>
                    <button class="outline" on:click=move |_| to_contact("/contact", Default::default())>
                        "Let's Connect"
                    </button>
                </div>
            </section>

            <section class="grid grid-4">
                {OVERVIEW_STATS.iter().map(|stat| view! {
                    <div class="card stat">
                        <div class="stat-value">{stat.value}</div>
                        <div class="muted small">{stat.label}</div>
                    </div>
                }).collect::<Vec<_>>()}
            </section>

            <section class="grid grid-2">
                <div class="card">
                    <h3>"Technical Expertise"</h3>
                    {SKILLS.iter().map(|skill| view! {
                        <div style="margin-bottom: 1.5rem;">
                            <div style="display: flex; justify-content: space-between;" class="small">
                                <span>{skill.name}</span>
                                <span class="muted">{format!("{}%", skill.level)}</span>
                            </div>
                            <div class="bar">
                                <div class="bar-fill" style=format!("width: {}%;", skill.level)></div>
                            </div>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
                <div class="card">
                    <h3>"Recent Activity"</h3>
                    {RECENT_ACTIVITY.iter().map(|activity| view! {
                        <div class="activity">
                            <span class=activity.kind.dot_class()></span>
                            <div>
                                <div class="small" style="font-weight: 500;">{activity.action}</div>
                                <div class="muted small">{activity.when}</div>
                            </div>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </section>

            <section class="card about" inner_html=about_html()></section>

            <CallToAction
                title="Ready to Start Your Next Project?"
                body="Let's collaborate and bring your vision to life with modern technology and creative solutions."
                action="Let's Work Together"
            />
        </div>
    }
}

#[component]
fn CallToAction(title: &'static str, body: &'static str, action: &'static str) -> impl IntoView {
    let navigate = use_navigate();
    view! {
        <section class="card cta">
            <h3>{title}</h3>
            <p class="muted">{body}</p>
            <button class="primary" on:click=move |_| navigate("/contact", Default::default())>
                {action}
            </button>
        </section>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let criteria = RwSignal::new(FilterCriteria::default());
    let visible = Memo::new(move |_| criteria.with(|k| filter_projects(catalog(), k)));

    view! {
        <div class="page">
            <header class="page-header">
                <h1>"Featured Projects"</h1>
                <p class="muted">
                    "A showcase of innovative solutions spanning web applications, AI integrations, and cutting-edge technologies. "
                    "Each project represents a unique challenge and learning opportunity."
                </p>
            </header>

            <section class="card filters">
                <input
                    type="text"
                    class="search"
                    placeholder="Search projects..."
                    prop:value=move || criteria.with(|k| k.search_term.clone())
                    on:input=move |ev| {
                        let term = event_target_value(&ev);
                        criteria.update(|k| k.search_term = term);
                    }
                />
                <div class="chips">
                    {CategoryFilter::choices().map(|choice| view! {
                        <button
                            class=move || if criteria.with(|k| k.category == choice) { "chip active" } else { "chip" }
                            on:click=move |_| criteria.update(|k| k.category = choice)
                        >
                            {choice.label()}
                        </button>
                    }).collect::<Vec<_>>()}
                </div>
                <div class="muted small">
                    {move || format!("Showing {} of {} projects", visible.with(Vec::len), catalog().len())}
                </div>
            </section>

            <section class="grid grid-3">
                {move || visible.get().into_iter().map(|project| view! {
                    <ProjectCard project=project/>
                }).collect::<Vec<_>>()}
            </section>

            <Show when=move || visible.with(Vec::is_empty)>
                <div class="card empty-state">
                    <h3>"No projects found"</h3>
                    <p class="muted">"Try adjusting your search or filter criteria."</p>
                    <button
                        class="outline"
                        disabled=move || criteria.with(FilterCriteria::is_default)
                        on:click=move |_| criteria.set(FilterCriteria::default())
                    >
                        "Clear filters"
                    </button>
                </div>
            </Show>

            <CallToAction
                title="Have a Project in Mind?"
                body="I'm passionate about taking on new challenges and creating innovative solutions. Let's discuss how we can bring your vision to life!"
                action="Start a Project"
            />
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static ProjectRecord) -> impl IntoView {
    view! {
        <article class="card project">
            <div class="project-image">
                <img src=project.image alt=project.title/>
                <span class=project.status.badge_class()>{project.status.label()}</span>
                <div class="project-links">
                    <a class="button secondary" href=project.live_url>"Demo"</a>
                    <a class="button secondary" href=project.code_url>"Code"</a>
                </div>
            </div>
            <div class="project-body">
                <div style="display: flex; justify-content: space-between; align-items: start;">
                    <h3>{project.title}</h3>
                    <span class="rating" title=format!("{} / {}", project.rating, Rating::MAX)>
                        {format!("\u{2605} {}", project.rating)}
                    </span>
                </div>
                <p class="muted">{project.description}</p>
                <div class="project-stats small">
                    <div>
                        <div class="muted">"Timeline"</div>
                        <div>{project.timeline}</div>
                    </div>
                    <div>
                        <div class="muted">"Category"</div>
                        <div>{project.category.label()}</div>
                    </div>
                </div>
                <div class="tags">
                    {project.features.iter().map(|feature| view! { <span class="tag feature">{*feature}</span> }).collect::<Vec<_>>()}
                </div>
                <div class="tags">
                    {project.technologies.iter().map(|tech| view! { <span class="tag">{*tech}</span> }).collect::<Vec<_>>()}
                </div>
            </div>
        </article>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let submit_delay = config.submit_delay_ms;
    let confirmation = config.confirmation_ms;

    let form = RwSignal::new(ContactForm::default());
    let submitted = Memo::new(move |_| form.with(ContactForm::is_submitted));
    let submitting = Memo::new(move |_| form.with(ContactForm::is_submitting));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(outcome) = form.try_update(|f| f.begin_submit()) else {
            return;
        };
        let ticket = match outcome {
            Ok(ticket) => ticket,
            Err(e) => {
                warn!("contact form not sent: {e}");
                return;
            }
        };
        spawn_local(async move {
            sleep(submit_delay).await;
            if form.try_update(|f| f.finish_submit(ticket)) != Some(true) {
                return;
            }
            log!("contact message accepted (simulated)");
            sleep(confirmation).await;
            form.try_update(|f| f.expire_confirmation(ticket));
        });
    };

    view! {
        <div class="page">
            <header class="page-header">
                <h1>"Let's Work Together"</h1>
                <p class="muted">
                    "Ready to turn your vision into reality? I'd love to hear about your project and discuss how we can work together to create something amazing."
                </p>
            </header>

            <section class="card grid grid-3">
                {CONTACT_STATS.iter().map(|stat| view! {
                    <div class="stat">
                        <div class="stat-value">{stat.value}</div>
                        <div class="muted small">{stat.label}</div>
                    </div>
                }).collect::<Vec<_>>()}
            </section>

            <div class="grid contact-layout">
                <section class="card">
                    <h2>"Send a Message"</h2>
                    {move || if submitted.get() {
                        view! {
                            <div class="success">
                                <h3>"Message Sent Successfully!"</h3>
                                <p class="muted">
                                    "Thank you for reaching out! I've received your message and will get back to you within 24 hours."
                                </p>
                                <span class="availability">"Expect a response soon!"</span>
                            </div>
                        }.into_any()
                    } else {
                        view! {
                            <form class="contact-form" on:submit=on_submit novalidate=true>
                                <div class="grid grid-2">
                                    <FormField form=form field=Field::Name kind="text" placeholder="Your full name"/>
                                    <FormField form=form field=Field::Email kind="email" placeholder="your.email@example.com"/>
                                </div>
                                <div class="grid grid-2">
                                    <div class="field">
                                        <label for="projectType">"Project Type"</label>
                                        <select
                                            id="projectType"
                                            prop:value=move || form.with(|f| f.fields.project_type.label().to_string())
                                            on:change=move |ev| {
                                                if let Some(kind) = ProjectType::from_label(&event_target_value(&ev)) {
                                                    form.update(|f| f.select_project_type(kind));
                                                }
                                            }
                                        >
                                            {ProjectType::ALL.into_iter().map(|kind| view! {
                                                <option value=kind.label()>{kind.label()}</option>
                                            }).collect::<Vec<_>>()}
                                        </select>
                                    </div>
                                    <FormField form=form field=Field::Subject kind="text" placeholder="What's this about?"/>
                                </div>
                                <FormField
                                    form=form
                                    field=Field::Message
                                    kind="textarea"
                                    placeholder="Tell me about your project, timeline, budget, or just say hello! The more details you provide, the better I can help you."
                                />
                                <button type="submit" class="primary wide" disabled=move || submitting.get()>
                                    {move || if submitting.get() { "Sending..." } else { "Send Message" }}
                                </button>
                            </form>
                        }.into_any()
                    }}
                </section>

                <aside style="display: flex; flex-direction: column; gap: 1.5rem;">
                    <section class="card">
                        <h3>"Contact Information"</h3>
                        {CHANNELS.iter().map(|channel| view! {
                            <a class="channel" href=channel.href>
                                <div class="small" style="font-weight: 500;">{channel.label}</div>
                                <div>{channel.value}</div>
                                <div class="muted small">{channel.note}</div>
                            </a>
                        }).collect::<Vec<_>>()}
                    </section>
                    <section class="card">
                        <h3>"Follow Me"</h3>
                        <div class="grid grid-2">
                            {SOCIAL_LINKS.iter().map(|link| view! {
                                <a class="button secondary" href=link.url>{link.name}</a>
                            }).collect::<Vec<_>>()}
                        </div>
                    </section>
                </aside>
            </div>
        </div>
    }
}

#[component]
fn FormField(
    form: RwSignal<ContactForm>,
    field: Field,
    kind: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let id = format!("{field:?}").to_lowercase();
    let value = move || form.with(|f| f.fields.value(field).to_string());
    let on_input = move |ev| {
        let text = event_target_value(&ev);
        form.update(|f| f.edit(field, text));
    };
    let error = move || {
        form.with(|f| f.errors.iter().find(|e| e.field == field).map(|e| e.to_string()))
    };

    let control = if kind == "textarea" {
        view! {
            <textarea id=id.clone() rows="6" placeholder=placeholder prop:value=value on:input=on_input></textarea>
        }.into_any()
    } else {
        view! {
            <input id=id.clone() type=kind placeholder=placeholder prop:value=value on:input=on_input/>
        }.into_any()
    };

    view! {
        <div class="field">
            <label for=id>{format!("{} *", field.label())}</label>
            {control}
            <span class="field-error">{error}</span>
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    let sidebar = expect_context::<SidebarHandle>();
    view! {
        <div class="page card empty-state">
            <h1>"Page not found"</h1>
            <p class="muted">"That page doesn't exist. Pick a destination from the menu."</p>
            <button class="primary" on:click=move |_| sidebar.open()>"Open menu"</button>
        </div>
    }
}
